use amoret_result::Result;

use crate::ModerationQueueEntry;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractModerationQueue: Sync + Send {
    /// Insert a new entry into the moderation queue
    async fn insert_queue_entry(&self, entry: &ModerationQueueEntry) -> Result<()>;

    /// Fetch a queue entry from the database
    async fn fetch_queue_entry(&self, id: &str) -> Result<ModerationQueueEntry>;

    /// Fetch queue entries ordered by descending suspicion score
    async fn fetch_queue_entries(&self) -> Result<Vec<ModerationQueueEntry>>;

    /// Fetch all queue entries referencing the given user
    async fn fetch_queue_entries_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ModerationQueueEntry>>;

    /// Delete a queue entry from the database
    async fn delete_queue_entry(&self, id: &str) -> Result<()>;

    /// Delete every queue entry referencing the given user
    async fn delete_queue_entries_by_user(&self, user_id: &str) -> Result<()>;
}
