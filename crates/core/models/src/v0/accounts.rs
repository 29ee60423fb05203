use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Review state a profile is currently in
    ///
    /// Exactly one state holds at any time; everything else shown to
    /// clients (visibility, moderation flags) is derived from it.
    #[serde(tag = "status", rename_all = "snake_case")]
    pub enum ProfileStatus {
        /// Waiting for initial review
        Pending {},

        /// Approved and visible in discovery
        Active {},

        /// Rejected during review, user may fix and resubmit
        Rejected {
            /// Which rejection rule was applied
            reason_code: RejectionCode,
            /// Canonical user-facing message for the code
            reason: String,
            /// Canonical fix-it instructions, with any admin note appended
            fix_instructions: String,
        },

        /// Temporarily removed from the platform
        Suspended {
            /// When the suspension lapses
            until: Timestamp,
            /// Why the suspension was applied
            reason: String,
        },

        /// Permanently removed, reversible only through an appeal
        Banned {},
    }

    /// Reason a profile was rejected during review
    #[serde(rename_all = "snake_case")]
    pub enum RejectionCode {
        /// No clear photo of the user's face
        NoFacePhoto,
        /// Photos violate content guidelines
        InappropriatePhotos,
        /// Photos appear stolen or generated
        FakePhotos,
        /// Bio section is empty or too short
        IncompleteBio,
        /// User appears to be under 18
        Underage,
        /// Profile is advertising or spam
        Spam,
        /// Bio or prompts contain offensive content
        OffensiveContent,
        /// Photos are too blurry or dark to review
        LowQualityPhotos,
        /// Bio contains contact information
        ContactInfoBio,
        /// Duplicate of another account
        MultipleAccounts,
    }

    /// One warning issued against an account
    pub struct Warning {
        /// Why the warning was issued
        pub reason: String,
        /// When the warning was issued
        pub timestamp: Timestamp,
        /// Id of the moderator who issued it
        pub moderated_by: String,
    }

    /// Moderation state carried on every account document
    ///
    /// The booleans mirror `ProfileStatus` and are written by the
    /// transition logic only, never edited directly.
    pub struct ModerationFlags {
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub is_banned: bool,
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub is_suspended: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub suspended_until: Option<Timestamp>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ban_reason: Option<String>,
        #[serde(skip_serializing_if = "crate::if_zero_u32", default)]
        pub warning_count: u32,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub warnings: Vec<Warning>,
    }
);

impl ProfileStatus {
    /// Status name as stored in the `status` tag
    pub fn name(&self) -> &'static str {
        match self {
            ProfileStatus::Pending {} => "pending",
            ProfileStatus::Active {} => "active",
            ProfileStatus::Rejected { .. } => "rejected",
            ProfileStatus::Suspended { .. } => "suspended",
            ProfileStatus::Banned {} => "banned",
        }
    }

    /// Whether a profile in this state appears in discovery
    pub fn is_visible(&self) -> bool {
        matches!(self, ProfileStatus::Active {})
    }
}

impl Default for ProfileStatus {
    fn default() -> Self {
        ProfileStatus::Pending {}
    }
}

impl Default for ModerationFlags {
    fn default() -> Self {
        ModerationFlags {
            is_banned: false,
            is_suspended: false,
            suspended_until: None,
            ban_reason: None,
            warning_count: 0,
            warnings: vec![],
        }
    }
}

impl RejectionCode {
    /// Canonical user-facing rejection message
    pub fn message(&self) -> &'static str {
        match self {
            RejectionCode::NoFacePhoto => {
                "Your profile needs at least one photo that clearly shows your face."
            }
            RejectionCode::InappropriatePhotos => {
                "One or more of your photos does not follow our content guidelines."
            }
            RejectionCode::FakePhotos => {
                "Your photos could not be verified as your own."
            }
            RejectionCode::IncompleteBio => {
                "Your bio is missing or too short for other members to get to know you."
            }
            RejectionCode::Underage => {
                "You must be at least 18 years old to use Amoret."
            }
            RejectionCode::Spam => {
                "Your profile looks like an advertisement or spam."
            }
            RejectionCode::OffensiveContent => {
                "Your bio or prompts contain content that violates our community guidelines."
            }
            RejectionCode::LowQualityPhotos => {
                "Your photos are too blurry or dark for our team to review."
            }
            RejectionCode::ContactInfoBio => {
                "Profiles may not include phone numbers, social handles or other contact details."
            }
            RejectionCode::MultipleAccounts => {
                "This profile appears to duplicate another Amoret account."
            }
        }
    }

    /// Canonical fix-it instructions accompanying the message
    pub fn fix_instructions(&self) -> &'static str {
        match self {
            RejectionCode::NoFacePhoto => {
                "Add a well-lit photo where your face is clearly visible, then resubmit your profile."
            }
            RejectionCode::InappropriatePhotos => {
                "Remove the flagged photos and replace them with ones that follow the guidelines, then resubmit."
            }
            RejectionCode::FakePhotos => {
                "Replace the photos with recent pictures of yourself, then resubmit your profile."
            }
            RejectionCode::IncompleteBio => {
                "Write a few sentences about yourself in the bio section, then resubmit."
            }
            RejectionCode::Underage => {
                "If your date of birth was entered incorrectly, correct it and resubmit with a document ready for verification."
            }
            RejectionCode::Spam => {
                "Remove promotional content and links from your profile, then resubmit."
            }
            RejectionCode::OffensiveContent => {
                "Rewrite the flagged sections of your bio and prompts, then resubmit."
            }
            RejectionCode::LowQualityPhotos => {
                "Upload sharper, well-lit photos, then resubmit your profile."
            }
            RejectionCode::ContactInfoBio => {
                "Remove contact details from your bio, then resubmit. You can share them in chat once matched."
            }
            RejectionCode::MultipleAccounts => {
                "Log back into your original account, or contact support if you believe this is a mistake."
            }
        }
    }
}

auto_derived!(
    /// Reject a pending profile
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataRejectProfile {
        /// Rejection rule to apply
        pub reason_code: RejectionCode,
        /// Optional note appended to the canonical fix instructions
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 500)))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub note: Option<String>,
    }

    /// Issue a warning against a user
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataWarnUser {
        /// Why the warning is being issued
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 500)))]
        pub reason: String,
    }

    /// Suspend a user for a number of days
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataSuspendUser {
        /// Why the user is being suspended
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 500)))]
        pub reason: String,
        /// Suspension length in days, service default when omitted
        #[cfg_attr(feature = "validator", validate(range(min = 1, max = 365)))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub days: Option<i64>,
    }

    /// Permanently ban a user
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataBanUser {
        /// Why the user is being banned
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 500)))]
        pub reason: String,
    }
);
