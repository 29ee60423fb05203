auto_derived!(
    /// Which lifecycle transition a notification announces
    #[serde(rename_all = "snake_case")]
    pub enum NotificationKind {
        Approved,
        Rejected,
        Warned,
        Suspended,
        Banned,
        Reinstated,
    }

    /// Push payload dispatched after a committed moderation transition
    pub struct ModerationNotification {
        /// Recipient user id
        pub user_id: String,
        /// Transition that was applied
        pub kind: NotificationKind,
        /// Notification title
        pub title: String,
        /// Notification body
        pub body: String,
        /// Optional deep link into the app
        #[serde(skip_serializing_if = "Option::is_none")]
        pub link: Option<String>,
    }
);
