use amoret_models::v0::{AppealStatus, DataSubmitAppeal, ProfileStatus, SanctionType};
use iso8601_timestamp::Timestamp;
use ulid::Ulid;
use validator::Validate;

use amoret_result::Result;

use crate::Database;

auto_derived_partial!(
    /// # Appeal
    ///
    /// User-initiated request to reverse a ban or suspension
    pub struct Appeal {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the sanctioned user
        pub user_id: String,
        /// Sanction being contested
        pub sanction: SanctionType,
        /// Reason originally recorded for the sanction
        #[serde(skip_serializing_if = "Option::is_none")]
        pub original_reason: Option<String>,
        /// The user's case, in their own words
        pub appeal_message: String,
        /// Review state of the appeal
        pub status: AppealStatus,
        /// When the appeal was submitted
        pub submitted_at: Timestamp,
    },
    "PartialAppeal"
);

#[allow(clippy::disallowed_methods)]
impl Appeal {
    /// Submit an appeal against the account's current sanction
    ///
    /// Only one pending appeal may exist per user and sanction type;
    /// review happens manually and never through this service.
    pub async fn create(db: &Database, user_id: &str, data: DataSubmitAppeal) -> Result<Appeal> {
        data.validate()
            .map_err(|error| create_error!(FailedValidation {
                error: error.to_string()
            }))?;

        let account = db.fetch_account(user_id).await?;

        let original_reason = match (&data.sanction, &account.profile_status) {
            (SanctionType::Ban, ProfileStatus::Banned {}) => {
                account.moderation_flags.ban_reason.clone()
            }
            (SanctionType::Suspension, ProfileStatus::Suspended { reason, .. }) => {
                Some(reason.clone())
            }
            _ => {
                return Err(create_transition_error!(
                    account.profile_status.name(),
                    "appeal"
                ))
            }
        };

        if db
            .fetch_pending_appeal(user_id, &data.sanction)
            .await?
            .is_some()
        {
            return Err(create_error!(AppealAlreadyPending));
        }

        let appeal = Appeal {
            id: Ulid::new().to_string(),
            user_id: user_id.to_string(),
            sanction: data.sanction,
            original_reason,
            appeal_message: data.appeal_message,
            status: AppealStatus::Pending,
            submitted_at: Timestamp::now_utc(),
        };

        db.insert_appeal(&appeal).await?;
        Ok(appeal)
    }
}

#[cfg(test)]
mod tests {
    use amoret_models::v0::{DataSubmitAppeal, SanctionType};
    use amoret_result::ErrorType;

    use crate::{Account, Appeal, Notifier, ReferenceNotifier};

    #[async_std::test]
    async fn appeal_message_length_is_enforced() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut account = Account::create(&db, "joan".to_string()).await.unwrap();
            account.approve(&db, &notifier).await.unwrap();
            account
                .ban(&db, &notifier, "fake profile".to_string())
                .await
                .unwrap();

            // 29 characters: rejected
            let err = Appeal::create(
                &db,
                &account.id,
                DataSubmitAppeal {
                    sanction: SanctionType::Ban,
                    appeal_message: "a".repeat(29),
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::FailedValidation { .. }));

            // 30 characters: accepted
            let appeal = Appeal::create(
                &db,
                &account.id,
                DataSubmitAppeal {
                    sanction: SanctionType::Ban,
                    appeal_message: "a".repeat(30),
                },
            )
            .await
            .unwrap();
            assert_eq!(appeal.original_reason.as_deref(), Some("fake profile"));
        });
    }

    #[async_std::test]
    async fn duplicate_pending_appeal_is_rejected() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut account = Account::create(&db, "omar".to_string()).await.unwrap();
            account.approve(&db, &notifier).await.unwrap();
            account
                .suspend(&db, &notifier, "spam".to_string(), Some(7))
                .await
                .unwrap();

            let message = "I believe this suspension was applied in error.".to_string();

            Appeal::create(
                &db,
                &account.id,
                DataSubmitAppeal {
                    sanction: SanctionType::Suspension,
                    appeal_message: message.clone(),
                },
            )
            .await
            .unwrap();

            let err = Appeal::create(
                &db,
                &account.id,
                DataSubmitAppeal {
                    sanction: SanctionType::Suspension,
                    appeal_message: message,
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::AppealAlreadyPending));

            assert_eq!(db.fetch_appeals(Some("pending")).await.unwrap().len(), 1);
        });
    }

    #[async_std::test]
    async fn appeal_requires_matching_sanction() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut account = Account::create(&db, "saskia".to_string()).await.unwrap();
            account.approve(&db, &notifier).await.unwrap();

            // an active account has nothing to appeal
            let err = Appeal::create(
                &db,
                &account.id,
                DataSubmitAppeal {
                    sanction: SanctionType::Ban,
                    appeal_message: "a".repeat(40),
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(
                err.error_type,
                ErrorType::InvalidTransition { .. }
            ));
        });
    }
}
