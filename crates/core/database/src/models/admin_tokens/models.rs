use iso8601_timestamp::Timestamp;

auto_derived!(
    /// Bearer token granting access to the moderation api
    pub struct AdminToken {
        /// The token ID
        #[serde(rename = "_id")]
        pub id: String,
        /// The admin user this token is attached to
        pub user_id: String,
        /// The token itself
        pub token: String,
        /// The expiry timestamp for this token
        pub expiry: Timestamp,
    }
);
