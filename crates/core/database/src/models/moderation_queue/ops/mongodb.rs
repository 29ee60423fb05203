use amoret_result::Result;
use mongodb::options::FindOptions;

use crate::ModerationQueueEntry;
use crate::MongoDb;

use super::AbstractModerationQueue;

static COL: &str = "moderation_queue";

#[async_trait]
impl AbstractModerationQueue for MongoDb {
    /// Insert a new entry into the moderation queue
    async fn insert_queue_entry(&self, entry: &ModerationQueueEntry) -> Result<()> {
        query!(self, insert_one, COL, &entry).map(|_| ())
    }

    /// Fetch a queue entry from the database
    async fn fetch_queue_entry(&self, id: &str) -> Result<ModerationQueueEntry> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch queue entries ordered by descending suspicion score
    async fn fetch_queue_entries(&self) -> Result<Vec<ModerationQueueEntry>> {
        let config = amoret_config::config().await;

        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder()
                .sort(doc! {
                    "suspicion_score": -1
                })
                .limit(config.features.moderation.queue_page_size)
                .build()
        )
    }

    /// Fetch all queue entries referencing the given user
    async fn fetch_queue_entries_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ModerationQueueEntry>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "reported_user_id": user_id
            }
        )
    }

    /// Delete a queue entry from the database
    async fn delete_queue_entry(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|result| {
            if result.deleted_count > 0 {
                Ok(())
            } else {
                Err(create_error!(NotFound))
            }
        })?
    }

    /// Delete every queue entry referencing the given user
    async fn delete_queue_entries_by_user(&self, user_id: &str) -> Result<()> {
        query!(
            self,
            delete_many,
            COL,
            doc! {
                "reported_user_id": user_id
            }
        )
        .map(|_| ())
    }
}
