use amoret_models::v0::ModerationStats;
use amoret_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractStats: Sync + Send {
    /// Generate moderation workload statistics
    async fn generate_moderation_stats(&self) -> Result<ModerationStats>;
}
