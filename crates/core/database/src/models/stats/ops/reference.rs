use amoret_models::v0::{AppealStatus, ModerationStats, ProfileStatus, ReportStatus};
use amoret_result::Result;

use crate::ReferenceDb;

use super::AbstractStats;

#[async_trait]
impl AbstractStats for ReferenceDb {
    /// Generate moderation workload statistics
    async fn generate_moderation_stats(&self) -> Result<ModerationStats> {
        let accounts = self.accounts.lock().await;
        let reports = self.reports.lock().await;
        let appeals = self.appeals.lock().await;
        let moderation_queue = self.moderation_queue.lock().await;

        Ok(ModerationStats {
            pending_profiles: accounts
                .values()
                .filter(|account| matches!(account.profile_status, ProfileStatus::Pending {}))
                .count() as u64,
            open_reports: reports
                .values()
                .filter(|report| matches!(report.status, ReportStatus::Pending {}))
                .count() as u64,
            queued_profiles: moderation_queue.len() as u64,
            pending_appeals: appeals
                .values()
                .filter(|appeal| appeal.status == AppealStatus::Pending)
                .count() as u64,
            suspended_accounts: accounts
                .values()
                .filter(|account| {
                    matches!(account.profile_status, ProfileStatus::Suspended { .. })
                })
                .count() as u64,
            banned_accounts: accounts
                .values()
                .filter(|account| matches!(account.profile_status, ProfileStatus::Banned {}))
                .count() as u64,
        })
    }
}
