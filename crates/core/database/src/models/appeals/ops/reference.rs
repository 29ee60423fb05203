use amoret_models::v0::{AppealStatus, SanctionType};
use amoret_result::Result;

use crate::Appeal;
use crate::ReferenceDb;

use super::AbstractAppeals;

#[async_trait]
impl AbstractAppeals for ReferenceDb {
    /// Insert a new appeal into the database
    async fn insert_appeal(&self, appeal: &Appeal) -> Result<()> {
        let mut appeals = self.appeals.lock().await;
        if appeals.contains_key(&appeal.id) {
            Err(create_database_error!("insert", "appeal"))
        } else {
            appeals.insert(appeal.id.to_string(), appeal.clone());
            Ok(())
        }
    }

    /// Fetch an appeal from the database
    async fn fetch_appeal(&self, id: &str) -> Result<Appeal> {
        let appeals = self.appeals.lock().await;
        appeals
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch the pending appeal for a user and sanction type, if any
    async fn fetch_pending_appeal(
        &self,
        user_id: &str,
        sanction: &SanctionType,
    ) -> Result<Option<Appeal>> {
        let appeals = self.appeals.lock().await;
        Ok(appeals
            .values()
            .find(|appeal| {
                appeal.user_id == user_id
                    && &appeal.sanction == sanction
                    && appeal.status == AppealStatus::Pending
            })
            .cloned())
    }

    /// Fetch appeals, optionally filtered by status
    async fn fetch_appeals(&self, status: Option<&str>) -> Result<Vec<Appeal>> {
        let appeals = self.appeals.lock().await;
        Ok(appeals
            .values()
            .filter(|appeal| match status {
                Some(status) => appeal.status.name() == status,
                None => true,
            })
            .cloned()
            .collect())
    }
}
