mod amqp;
mod reference;

pub use self::amqp::*;
pub use self::reference::*;

use amoret_models::v0::{ModerationNotification, NotificationKind};
use amoret_result::Result;
use iso8601_timestamp::Timestamp;

use crate::Account;

/// Notification dispatcher contract
///
/// Delivery is fire-and-forget from the lifecycle's point of view:
/// callers commit their state change first and only log a failure
/// returned from here.
#[async_trait]
pub trait AbstractNotifier: Sync + Send {
    /// Dispatch a single moderation notification
    async fn dispatch(&self, notification: ModerationNotification) -> Result<()>;
}

/// Notification dispatcher
#[derive(Clone)]
pub enum Notifier {
    /// Collecting mock dispatcher
    Reference(ReferenceNotifier),
    /// RabbitMQ-backed dispatcher
    Amqp(AmqpNotifier),
}

impl std::ops::Deref for Notifier {
    type Target = dyn AbstractNotifier;

    fn deref(&self) -> &Self::Target {
        match &self {
            Notifier::Reference(dummy) => dummy,
            Notifier::Amqp(amqp) => amqp,
        }
    }
}

impl Notifier {
    /// Tell a user their profile went live
    pub async fn profile_approved(&self, account: &Account) -> Result<()> {
        self.dispatch(ModerationNotification {
            user_id: account.id.to_string(),
            kind: NotificationKind::Approved,
            title: "Your profile is live!".to_string(),
            body: "Your profile has been approved and is now visible to other members."
                .to_string(),
            link: None,
        })
        .await
    }

    /// Tell a user their profile was rejected and how to fix it
    pub async fn profile_rejected(
        &self,
        account: &Account,
        reason: &str,
        fix_instructions: &str,
    ) -> Result<()> {
        let config = amoret_config::config().await;

        self.dispatch(ModerationNotification {
            user_id: account.id.to_string(),
            kind: NotificationKind::Rejected,
            title: "Your profile needs changes".to_string(),
            body: format!("{reason}\n\n{fix_instructions}"),
            link: Some(format!("{}/profile/edit", config.hosts.app)),
        })
        .await
    }

    /// Tell a user they received a warning
    pub async fn user_warned(&self, account: &Account, reason: &str) -> Result<()> {
        self.dispatch(ModerationNotification {
            user_id: account.id.to_string(),
            kind: NotificationKind::Warned,
            title: "You have received a warning".to_string(),
            body: format!(
                "A moderator has issued a warning against your account: {reason}"
            ),
            link: None,
        })
        .await
    }

    /// Tell a user their account is suspended
    pub async fn user_suspended(
        &self,
        account: &Account,
        reason: &str,
        until: Timestamp,
    ) -> Result<()> {
        self.dispatch(ModerationNotification {
            user_id: account.id.to_string(),
            kind: NotificationKind::Suspended,
            title: "Your account has been suspended".to_string(),
            body: format!("Your account is suspended until {until}. Reason: {reason}"),
            link: None,
        })
        .await
    }

    /// Tell a user their account is banned
    pub async fn user_banned(&self, account: &Account, reason: &str) -> Result<()> {
        let config = amoret_config::config().await;

        self.dispatch(ModerationNotification {
            user_id: account.id.to_string(),
            kind: NotificationKind::Banned,
            title: "Your account has been banned".to_string(),
            body: format!(
                "Your account has been permanently banned. Reason: {reason}\n\nIf you believe this is a mistake, you can submit an appeal."
            ),
            link: Some(format!("{}/appeal", config.hosts.app)),
        })
        .await
    }

    /// Tell a user their suspension has lapsed
    pub async fn user_reinstated(&self, account: &Account) -> Result<()> {
        self.dispatch(ModerationNotification {
            user_id: account.id.to_string(),
            kind: NotificationKind::Reinstated,
            title: "Welcome back!".to_string(),
            body: "Your suspension has ended and your profile is visible again.".to_string(),
            link: None,
        })
        .await
    }
}
