auto_derived!(
    /// Moderation workload counters shown on the admin dashboard
    pub struct ModerationStats {
        /// Profiles waiting for initial review
        pub pending_profiles: u64,
        /// Reports not yet resolved
        pub open_reports: u64,
        /// Entries in the suspicious-profile queue
        pub queued_profiles: u64,
        /// Appeals waiting for a decision
        pub pending_appeals: u64,
        /// Accounts currently suspended
        pub suspended_accounts: u64,
        /// Accounts permanently banned
        pub banned_accounts: u64,
    }
);
