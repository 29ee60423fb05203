#[cfg(feature = "validator")]
use validator::Validate;

// Not in auto_derived!: the score is a float, so no Eq here.

/// Queue a profile for human review
///
/// Submitted by the upstream automated scorer; the score is advisory
/// and never mutates the account by itself.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[cfg_attr(feature = "validator", derive(Validate))]
#[derive(Debug, Clone, PartialEq)]
pub struct DataEnqueueSuspect {
    /// Id of the flagged account
    #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
    pub reported_user_id: String,
    /// Scorer confidence in [0, 1]
    #[cfg_attr(feature = "validator", validate(range(min = 0.0, max = 1.0)))]
    pub suspicion_score: f64,
    /// Free-text tags describing what tripped the scorer
    #[serde(default)]
    pub indicators: Vec<String>,
}
