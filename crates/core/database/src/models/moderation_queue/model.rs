use amoret_models::v0::DataEnqueueSuspect;
use iso8601_timestamp::Timestamp;
use ulid::Ulid;

use amoret_result::Result;

use crate::Database;

// Not in auto_derived_partial!: the score is a float, so no Eq here,
// and entries are only ever inserted and deleted.

/// # Moderation queue entry
///
/// Automatically flagged profile awaiting human review. Entries are
/// advisory and never mutate the account by themselves.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct ModerationQueueEntry {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,
    /// Account the upstream scorer flagged
    pub reported_user_id: String,
    /// Scorer confidence in [0, 1]
    pub suspicion_score: f64,
    /// Free-text tags describing what tripped the scorer
    #[serde(default)]
    pub indicators: Vec<String>,
    /// When the entry was queued
    pub queued_at: Timestamp,
}

#[allow(clippy::disallowed_methods)]
impl ModerationQueueEntry {
    /// Queue a flagged profile for review
    pub async fn create(db: &Database, data: DataEnqueueSuspect) -> Result<ModerationQueueEntry> {
        // the flagged account must exist
        db.fetch_account(&data.reported_user_id).await?;

        let entry = ModerationQueueEntry {
            id: Ulid::new().to_string(),
            reported_user_id: data.reported_user_id,
            suspicion_score: data.suspicion_score,
            indicators: data.indicators,
            queued_at: Timestamp::now_utc(),
        };

        db.insert_queue_entry(&entry).await?;
        Ok(entry)
    }

    /// Remove this entry without touching the account
    pub async fn dismiss(&self, db: &Database) -> Result<()> {
        db.delete_queue_entry(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use amoret_models::v0::DataEnqueueSuspect;
    use amoret_result::ErrorType;

    use crate::{Account, ModerationQueueEntry, Notifier, ReferenceNotifier};

    #[async_std::test]
    async fn queue_is_ordered_by_score() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut first = Account::create(&db, "ines".to_string()).await.unwrap();
            first.approve(&db, &notifier).await.unwrap();
            let mut second = Account::create(&db, "rudi".to_string()).await.unwrap();
            second.approve(&db, &notifier).await.unwrap();

            ModerationQueueEntry::create(
                &db,
                DataEnqueueSuspect {
                    reported_user_id: first.id.to_string(),
                    suspicion_score: 0.4,
                    indicators: vec!["new_device".to_string()],
                },
            )
            .await
            .unwrap();

            let urgent = ModerationQueueEntry::create(
                &db,
                DataEnqueueSuspect {
                    reported_user_id: second.id.to_string(),
                    suspicion_score: 0.95,
                    indicators: vec!["stock_photo".to_string(), "link_in_bio".to_string()],
                },
            )
            .await
            .unwrap();

            let entries = db.fetch_queue_entries().await.unwrap();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0], urgent);
        });
    }

    #[async_std::test]
    async fn dismiss_removes_entry_only() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut account = Account::create(&db, "viggo".to_string()).await.unwrap();
            account.approve(&db, &notifier).await.unwrap();

            let entry = ModerationQueueEntry::create(
                &db,
                DataEnqueueSuspect {
                    reported_user_id: account.id.to_string(),
                    suspicion_score: 0.6,
                    indicators: vec![],
                },
            )
            .await
            .unwrap();

            entry.dismiss(&db).await.unwrap();
            assert!(db.fetch_queue_entries().await.unwrap().is_empty());

            // the account is untouched
            let fetched = db.fetch_account(&account.id).await.unwrap();
            assert!(fetched.visibility);

            // dismissing twice is an error
            let err = entry.dismiss(&db).await.unwrap_err();
            assert!(matches!(err.error_type, ErrorType::NotFound));
        });
    }

    #[async_std::test]
    async fn unknown_account_cannot_be_queued() {
        database_test!(|db| async move {
            let err = ModerationQueueEntry::create(
                &db,
                DataEnqueueSuspect {
                    reported_user_id: "missing".to_string(),
                    suspicion_score: 0.5,
                    indicators: vec![],
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::NotFound));
        });
    }
}
