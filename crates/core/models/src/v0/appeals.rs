#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Which sanction an appeal contests
    #[serde(rename_all = "snake_case")]
    pub enum SanctionType {
        Ban,
        Suspension,
    }

    /// Review state of an appeal
    #[serde(rename_all = "snake_case")]
    pub enum AppealStatus {
        /// Waiting for a member of the moderation team
        Pending,
        /// Sanction lifted
        Approved,
        /// Sanction upheld
        Denied,
    }
);

impl SanctionType {
    /// Sanction name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            SanctionType::Ban => "ban",
            SanctionType::Suspension => "suspension",
        }
    }
}

impl AppealStatus {
    /// Status name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            AppealStatus::Pending => "pending",
            AppealStatus::Approved => "approved",
            AppealStatus::Denied => "denied",
        }
    }
}

auto_derived!(
    /// Contest a ban or suspension
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataSubmitAppeal {
        /// Sanction being contested
        pub sanction: SanctionType,
        /// The user's case, in their own words
        #[cfg_attr(feature = "validator", validate(length(min = 30, max = 2000)))]
        pub appeal_message: String,
    }
);
