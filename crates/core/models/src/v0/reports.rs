use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Reason for reporting a user
    #[serde(rename_all = "snake_case")]
    pub enum ReportReason {
        /// No reason has been specified
        NoneSpecified,

        /// Profile contains inappropriate content
        InappropriateProfile,

        /// Harassment inside or outside of chat
        Harassment,

        /// Photos or bio belong to somebody else
        FakeProfile,

        /// User is impersonating another person
        Impersonation,

        /// User appears to be under 18
        Underage,

        /// Asking for money, gifts or financial details
        Scam,

        /// Unsolicited advertisements or platform abuse
        SpamAbuse,
    }

    /// Action taken when a report is resolved
    #[serde(rename_all = "snake_case")]
    pub enum ReportResolution {
        /// Close the report without touching the account
        Dismiss,
        /// Warn the reported account
        Warn,
        /// Suspend the reported account
        Suspend,
        /// Ban the reported account
        Ban,
    }

    /// Status of the report
    #[serde(tag = "status", rename_all = "snake_case")]
    pub enum ReportStatus {
        /// Report is waiting for triage / action
        Pending {},

        /// Report was actioned and closed
        Resolved {
            /// Action that was applied
            resolution: ReportResolution,
            /// Free-text reason recorded by the resolving moderator
            #[serde(skip_serializing_if = "Option::is_none")]
            resolution_reason: Option<String>,
            /// When the report was closed
            resolved_at: Timestamp,
            /// Moderator who closed the report
            resolved_by: String,
        },
    }
);

impl ReportReason {
    /// Reason name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            ReportReason::NoneSpecified => "none_specified",
            ReportReason::InappropriateProfile => "inappropriate_profile",
            ReportReason::Harassment => "harassment",
            ReportReason::FakeProfile => "fake_profile",
            ReportReason::Impersonation => "impersonation",
            ReportReason::Underage => "underage",
            ReportReason::Scam => "scam",
            ReportReason::SpamAbuse => "spam_abuse",
        }
    }
}

impl ReportStatus {
    /// Status name as stored in the `status` tag
    pub fn name(&self) -> &'static str {
        match self {
            ReportStatus::Pending {} => "pending",
            ReportStatus::Resolved { .. } => "resolved",
        }
    }
}

auto_derived!(
    /// Submit a report against a user
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataReportUser {
        /// Id of the user being reported
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub id: String,
        /// Reason for the report
        pub reason: ReportReason,
        /// Additional free-text context
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 1000)))]
        #[serde(default)]
        pub additional_details: String,
    }

    /// Resolve a pending report
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataResolveReport {
        /// Action to apply
        pub resolution: ReportResolution,
        /// Reason passed through to the account transition
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 500)))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reason: Option<String>,
    }
);
