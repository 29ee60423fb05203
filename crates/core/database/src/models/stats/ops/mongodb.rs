use amoret_models::v0::ModerationStats;
use amoret_result::Result;

use crate::MongoDb;

use super::AbstractStats;

#[async_trait]
impl AbstractStats for MongoDb {
    /// Generate moderation workload statistics
    async fn generate_moderation_stats(&self) -> Result<ModerationStats> {
        Ok(ModerationStats {
            pending_profiles: query!(
                self,
                count_documents,
                "accounts",
                doc! {
                    "profile_status.status": "pending"
                }
            )?,
            open_reports: query!(
                self,
                count_documents,
                "reports",
                doc! {
                    "status": "pending"
                }
            )?,
            queued_profiles: query!(self, count_documents, "moderation_queue", doc! {})?,
            pending_appeals: query!(
                self,
                count_documents,
                "appeals",
                doc! {
                    "status": "pending"
                }
            )?,
            suspended_accounts: query!(
                self,
                count_documents,
                "accounts",
                doc! {
                    "profile_status.status": "suspended"
                }
            )?,
            banned_accounts: query!(
                self,
                count_documents,
                "accounts",
                doc! {
                    "profile_status.status": "banned"
                }
            )?,
        })
    }
}
