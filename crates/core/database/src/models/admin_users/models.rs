auto_derived_partial!(
    /// Member of the moderation team
    pub struct AdminUser {
        /// The ID of the user
        #[serde(rename = "_id")]
        pub id: String,
        /// The user's email
        pub email: String,
        /// Whether the user is active (ie. can they use the api)
        pub active: bool,
    },
    "PartialAdminUser"
);
