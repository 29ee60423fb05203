use amoret_models::v0::SanctionType;
use amoret_result::Result;

use crate::Appeal;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractAppeals: Sync + Send {
    /// Insert a new appeal into the database
    async fn insert_appeal(&self, appeal: &Appeal) -> Result<()>;

    /// Fetch an appeal from the database
    async fn fetch_appeal(&self, id: &str) -> Result<Appeal>;

    /// Fetch the pending appeal for a user and sanction type, if any
    async fn fetch_pending_appeal(
        &self,
        user_id: &str,
        sanction: &SanctionType,
    ) -> Result<Option<Appeal>>;

    /// Fetch appeals, optionally filtered by status
    async fn fetch_appeals(&self, status: Option<&str>) -> Result<Vec<Appeal>>;
}
