use amoret_result::Result;

use crate::ModerationQueueEntry;
use crate::ReferenceDb;

use super::AbstractModerationQueue;

#[async_trait]
impl AbstractModerationQueue for ReferenceDb {
    /// Insert a new entry into the moderation queue
    async fn insert_queue_entry(&self, entry: &ModerationQueueEntry) -> Result<()> {
        let mut moderation_queue = self.moderation_queue.lock().await;
        if moderation_queue.contains_key(&entry.id) {
            Err(create_database_error!("insert", "moderation_queue"))
        } else {
            moderation_queue.insert(entry.id.to_string(), entry.clone());
            Ok(())
        }
    }

    /// Fetch a queue entry from the database
    async fn fetch_queue_entry(&self, id: &str) -> Result<ModerationQueueEntry> {
        let moderation_queue = self.moderation_queue.lock().await;
        moderation_queue
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch queue entries ordered by descending suspicion score
    async fn fetch_queue_entries(&self) -> Result<Vec<ModerationQueueEntry>> {
        let config = amoret_config::config().await;

        let moderation_queue = self.moderation_queue.lock().await;
        let mut entries: Vec<ModerationQueueEntry> =
            moderation_queue.values().cloned().collect();
        entries.sort_by(|a, b| {
            b.suspicion_score
                .partial_cmp(&a.suspicion_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries.truncate(config.features.moderation.queue_page_size as usize);
        Ok(entries)
    }

    /// Fetch all queue entries referencing the given user
    async fn fetch_queue_entries_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ModerationQueueEntry>> {
        let moderation_queue = self.moderation_queue.lock().await;
        Ok(moderation_queue
            .values()
            .filter(|entry| entry.reported_user_id == user_id)
            .cloned()
            .collect())
    }

    /// Delete a queue entry from the database
    async fn delete_queue_entry(&self, id: &str) -> Result<()> {
        let mut moderation_queue = self.moderation_queue.lock().await;
        if moderation_queue.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    /// Delete every queue entry referencing the given user
    async fn delete_queue_entries_by_user(&self, user_id: &str) -> Result<()> {
        let mut moderation_queue = self.moderation_queue.lock().await;
        moderation_queue.retain(|_, entry| entry.reported_user_id != user_id);
        Ok(())
    }
}
