use std::sync::Arc;

use futures::lock::Mutex;

use amoret_models::v0::ModerationNotification;
use amoret_result::Result;

use super::AbstractNotifier;

/// Collecting dispatcher for tests and local development
#[derive(Clone, Default)]
pub struct ReferenceNotifier {
    pub sent: Arc<Mutex<Vec<ModerationNotification>>>,
}

#[async_trait]
impl AbstractNotifier for ReferenceNotifier {
    /// Dispatch a single moderation notification
    async fn dispatch(&self, notification: ModerationNotification) -> Result<()> {
        let mut sent = self.sent.lock().await;
        sent.push(notification);
        Ok(())
    }
}
