use amoret_models::v0::SanctionType;
use amoret_result::Result;

use crate::Appeal;
use crate::MongoDb;

use super::AbstractAppeals;

static COL: &str = "appeals";

#[async_trait]
impl AbstractAppeals for MongoDb {
    /// Insert a new appeal into the database
    async fn insert_appeal(&self, appeal: &Appeal) -> Result<()> {
        query!(self, insert_one, COL, &appeal).map(|_| ())
    }

    /// Fetch an appeal from the database
    async fn fetch_appeal(&self, id: &str) -> Result<Appeal> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch the pending appeal for a user and sanction type, if any
    async fn fetch_pending_appeal(
        &self,
        user_id: &str,
        sanction: &SanctionType,
    ) -> Result<Option<Appeal>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "user_id": user_id,
                "sanction": sanction.name(),
                "status": "pending"
            }
        )
    }

    /// Fetch appeals, optionally filtered by status
    async fn fetch_appeals(&self, status: Option<&str>) -> Result<Vec<Appeal>> {
        let mut projection = doc! {};
        if let Some(status) = status {
            projection.insert("status", status);
        }

        query!(self, find, COL, projection)
    }
}
