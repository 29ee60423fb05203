use amoret_models::v0::{
    DataRejectProfile, ModerationFlags, ProfileStatus, Warning,
};
use iso8601_timestamp::{Duration, Timestamp};
use ulid::Ulid;

use amoret_result::Result;

use crate::{Database, Notifier};

auto_derived_partial!(
    /// # Account
    ///
    /// A registered user and their moderation-relevant state. The
    /// `profile_status` tag is the single source of truth; visibility
    /// and the moderation flags are projections written alongside it.
    pub struct Account {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Display handle used in admin tooling and notifications
        pub username: String,
        /// Current review state
        pub profile_status: ProfileStatus,
        /// Flag projection of `profile_status` kept for the clients
        #[serde(default)]
        pub moderation_flags: ModerationFlags,
        /// Whether the profile appears in discovery
        #[serde(default)]
        pub visibility: bool,
    },
    "PartialAccount"
);

#[allow(clippy::disallowed_methods)]
impl Account {
    /// Create a new account awaiting review
    pub async fn create(db: &Database, username: String) -> Result<Account> {
        let account = Account {
            id: Ulid::new().to_string(),
            username,
            profile_status: ProfileStatus::Pending {},
            moderation_flags: ModerationFlags::default(),
            visibility: false,
        };

        db.insert_account(&account).await?;
        Ok(account)
    }

    /// Persist a new status together with its derived projections
    async fn apply_status(
        &mut self,
        db: &Database,
        status: ProfileStatus,
        moderation_flags: ModerationFlags,
    ) -> Result<()> {
        let partial = PartialAccount {
            visibility: Some(status.is_visible()),
            profile_status: Some(status),
            moderation_flags: Some(moderation_flags),
            ..Default::default()
        };

        db.update_account(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Approve a pending profile, making it visible in discovery
    pub async fn approve(&mut self, db: &Database, notifier: &Notifier) -> Result<()> {
        if !matches!(self.profile_status, ProfileStatus::Pending {}) {
            return Err(create_transition_error!(
                self.profile_status.name(),
                "approve"
            ));
        }

        self.apply_status(db, ProfileStatus::Active {}, self.moderation_flags.clone())
            .await?;

        if let Err(err) = notifier.profile_approved(self).await {
            warn!("Failed to dispatch approval notification: {:?}", &err);
        }

        Ok(())
    }

    /// Reject a pending profile with a canonical reason
    ///
    /// The admin note is appended to the canonical fix instructions,
    /// never substituted for them.
    pub async fn reject(
        &mut self,
        db: &Database,
        notifier: &Notifier,
        data: DataRejectProfile,
    ) -> Result<()> {
        if !matches!(self.profile_status, ProfileStatus::Pending {}) {
            return Err(create_transition_error!(
                self.profile_status.name(),
                "reject"
            ));
        }

        let reason = data.reason_code.message().to_string();
        let mut fix_instructions = data.reason_code.fix_instructions().to_string();
        if let Some(note) = data.note {
            fix_instructions = format!("{fix_instructions}\n\nAdditional Note from Admin:\n{note}");
        }

        self.apply_status(
            db,
            ProfileStatus::Rejected {
                reason_code: data.reason_code,
                reason: reason.to_string(),
                fix_instructions: fix_instructions.to_string(),
            },
            self.moderation_flags.clone(),
        )
        .await?;

        if let Err(err) = notifier
            .profile_rejected(self, &reason, &fix_instructions)
            .await
        {
            warn!("Failed to dispatch rejection notification: {:?}", &err);
        }

        Ok(())
    }

    /// Put a rejected profile back into review after the user edited it
    pub async fn resubmit(&mut self, db: &Database) -> Result<()> {
        if !matches!(self.profile_status, ProfileStatus::Rejected { .. }) {
            return Err(create_transition_error!(
                self.profile_status.name(),
                "resubmit"
            ));
        }

        self.apply_status(db, ProfileStatus::Pending {}, self.moderation_flags.clone())
            .await
    }

    /// Record a warning against this account without changing its status
    pub async fn warn(
        &mut self,
        db: &Database,
        notifier: &Notifier,
        reason: String,
        moderator_id: &str,
    ) -> Result<()> {
        if matches!(self.profile_status, ProfileStatus::Banned {}) {
            return Err(create_transition_error!(self.profile_status.name(), "warn"));
        }

        let mut moderation_flags = self.moderation_flags.clone();
        moderation_flags.warning_count += 1;
        moderation_flags.warnings.push(Warning {
            reason: reason.clone(),
            timestamp: Timestamp::now_utc(),
            moderated_by: moderator_id.to_string(),
        });

        self.apply_status(db, self.profile_status.clone(), moderation_flags)
            .await?;

        if let Err(err) = notifier.user_warned(self, &reason).await {
            warn!("Failed to dispatch warning notification: {:?}", &err);
        }

        Ok(())
    }

    /// Suspend this account, hiding it until the suspension lapses
    pub async fn suspend(
        &mut self,
        db: &Database,
        notifier: &Notifier,
        reason: String,
        days: Option<i64>,
    ) -> Result<()> {
        if matches!(self.profile_status, ProfileStatus::Banned {}) {
            return Err(create_transition_error!(
                self.profile_status.name(),
                "suspend"
            ));
        }

        let days = match days {
            Some(days) => days,
            None => {
                amoret_config::config()
                    .await
                    .features
                    .moderation
                    .default_suspension_days
            }
        };

        let until = Timestamp::now_utc() + Duration::days(days);

        let mut moderation_flags = self.moderation_flags.clone();
        moderation_flags.is_suspended = true;
        moderation_flags.suspended_until = Some(until);

        self.apply_status(
            db,
            ProfileStatus::Suspended {
                until,
                reason: reason.clone(),
            },
            moderation_flags,
        )
        .await?;

        if let Err(err) = notifier.user_suspended(self, &reason, until).await {
            warn!("Failed to dispatch suspension notification: {:?}", &err);
        }

        Ok(())
    }

    /// Permanently ban this account
    ///
    /// Also purges the account from the moderation queue; reversal
    /// only happens through a manually reviewed appeal.
    pub async fn ban(
        &mut self,
        db: &Database,
        notifier: &Notifier,
        reason: String,
    ) -> Result<()> {
        if matches!(self.profile_status, ProfileStatus::Banned {}) {
            return Err(create_transition_error!(self.profile_status.name(), "ban"));
        }

        let mut moderation_flags = self.moderation_flags.clone();
        moderation_flags.is_banned = true;
        moderation_flags.is_suspended = false;
        moderation_flags.suspended_until = None;
        moderation_flags.ban_reason = Some(reason.clone());

        self.apply_status(db, ProfileStatus::Banned {}, moderation_flags)
            .await?;

        db.delete_queue_entries_by_user(&self.id).await?;

        if let Err(err) = notifier.user_banned(self, &reason).await {
            warn!("Failed to dispatch ban notification: {:?}", &err);
        }

        Ok(())
    }

    /// Return a suspended account to active once its suspension lapsed
    pub async fn reinstate(&mut self, db: &Database, notifier: &Notifier) -> Result<()> {
        if !matches!(self.profile_status, ProfileStatus::Suspended { .. }) {
            return Err(create_transition_error!(
                self.profile_status.name(),
                "reinstate"
            ));
        }

        let mut moderation_flags = self.moderation_flags.clone();
        moderation_flags.is_suspended = false;
        moderation_flags.suspended_until = None;

        self.apply_status(db, ProfileStatus::Active {}, moderation_flags)
            .await?;

        if let Err(err) = notifier.user_reinstated(self).await {
            warn!("Failed to dispatch reinstatement notification: {:?}", &err);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use amoret_models::v0::{
        DataEnqueueSuspect, DataRejectProfile, NotificationKind, ProfileStatus, RejectionCode,
    };
    use amoret_result::ErrorType;

    use crate::{Account, ModerationQueueEntry, Notifier, ReferenceNotifier};

    #[async_std::test]
    async fn approve_pending_account() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut account = Account::create(&db, "nadia".to_string()).await.unwrap();
            assert!(matches!(account.profile_status, ProfileStatus::Pending {}));
            assert!(!account.visibility);

            account.approve(&db, &notifier).await.unwrap();
            assert!(matches!(account.profile_status, ProfileStatus::Active {}));
            assert!(account.visibility);

            let fetched = db.fetch_account(&account.id).await.unwrap();
            assert_eq!(fetched, account);

            // a second approval is no longer valid
            let err = account.approve(&db, &notifier).await.unwrap_err();
            assert!(matches!(
                err.error_type,
                ErrorType::InvalidTransition { .. }
            ));
        });
    }

    #[async_std::test]
    async fn reject_appends_admin_note() {
        database_test!(|db| async move {
            let reference = ReferenceNotifier::default();
            let notifier = Notifier::Reference(reference.clone());

            let mut account = Account::create(&db, "theo".to_string()).await.unwrap();
            account
                .reject(
                    &db,
                    &notifier,
                    DataRejectProfile {
                        reason_code: RejectionCode::NoFacePhoto,
                        note: Some("Please retake".to_string()),
                    },
                )
                .await
                .unwrap();

            assert!(!account.visibility);
            match &account.profile_status {
                ProfileStatus::Rejected {
                    reason,
                    fix_instructions,
                    ..
                } => {
                    assert_eq!(reason, RejectionCode::NoFacePhoto.message());
                    assert!(fix_instructions.starts_with(RejectionCode::NoFacePhoto.fix_instructions()));
                    assert!(fix_instructions.ends_with("Additional Note from Admin:\nPlease retake"));
                }
                status => panic!("unexpected status {status:?}"),
            }

            let sent = reference.sent.lock().await;
            assert_eq!(sent.len(), 1);
            assert_eq!(sent[0].kind, NotificationKind::Rejected);
            assert_eq!(sent[0].user_id, account.id);

            drop(sent);

            // the user fixes their profile and goes back into review
            account.resubmit(&db).await.unwrap();
            assert!(matches!(account.profile_status, ProfileStatus::Pending {}));
        });
    }

    #[async_std::test]
    async fn warnings_accumulate() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut account = Account::create(&db, "mara".to_string()).await.unwrap();
            account.approve(&db, &notifier).await.unwrap();

            account
                .warn(&db, &notifier, "rude messages".to_string(), "mod_01")
                .await
                .unwrap();
            account
                .warn(&db, &notifier, "more rude messages".to_string(), "mod_01")
                .await
                .unwrap();

            // warnings never change the account status
            assert!(matches!(account.profile_status, ProfileStatus::Active {}));

            let fetched = db.fetch_account(&account.id).await.unwrap();
            assert_eq!(fetched.moderation_flags.warning_count, 2);
            assert_eq!(fetched.moderation_flags.warnings.len(), 2);
            assert_eq!(fetched.moderation_flags.warnings[0].reason, "rude messages");
        });
    }

    #[async_std::test]
    async fn suspension_hides_profile() {
        database_test!(|db| async move {
            let reference = ReferenceNotifier::default();
            let notifier = Notifier::Reference(reference.clone());

            let mut account = Account::create(&db, "iris".to_string()).await.unwrap();
            account.approve(&db, &notifier).await.unwrap();
            account
                .suspend(&db, &notifier, "fake photos".to_string(), Some(3))
                .await
                .unwrap();

            assert!(!account.visibility);
            assert!(account.moderation_flags.is_suspended);
            assert!(account.moderation_flags.suspended_until.is_some());

            account.reinstate(&db, &notifier).await.unwrap();
            assert!(account.visibility);
            assert!(!account.moderation_flags.is_suspended);
            assert!(account.moderation_flags.suspended_until.is_none());

            let kinds: Vec<NotificationKind> = reference
                .sent
                .lock()
                .await
                .iter()
                .map(|notification| notification.kind.clone())
                .collect();
            assert_eq!(
                kinds,
                vec![
                    NotificationKind::Approved,
                    NotificationKind::Suspended,
                    NotificationKind::Reinstated
                ]
            );
        });
    }

    #[async_std::test]
    async fn lapsed_suspensions_are_swept() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut lapsed = Account::create(&db, "noor".to_string()).await.unwrap();
            lapsed.approve(&db, &notifier).await.unwrap();
            lapsed
                .suspend(&db, &notifier, "cooldown".to_string(), Some(-1))
                .await
                .unwrap();

            let mut ongoing = Account::create(&db, "remy".to_string()).await.unwrap();
            ongoing.approve(&db, &notifier).await.unwrap();
            ongoing
                .suspend(&db, &notifier, "cooldown".to_string(), Some(7))
                .await
                .unwrap();

            let accounts = db
                .fetch_accounts_with_lapsed_suspension(iso8601_timestamp::Timestamp::now_utc())
                .await
                .unwrap();
            assert_eq!(accounts.len(), 1);
            assert_eq!(accounts[0].id, lapsed.id);
        });
    }

    #[async_std::test]
    async fn ban_purges_moderation_queue() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut account = Account::create(&db, "silas".to_string()).await.unwrap();
            account.approve(&db, &notifier).await.unwrap();

            for score in [0.7, 0.9] {
                ModerationQueueEntry::create(
                    &db,
                    DataEnqueueSuspect {
                        reported_user_id: account.id.to_string(),
                        suspicion_score: score,
                        indicators: vec!["stock_photo".to_string()],
                    },
                )
                .await
                .unwrap();
            }

            assert_eq!(
                db.fetch_queue_entries_by_user(&account.id)
                    .await
                    .unwrap()
                    .len(),
                2
            );

            account
                .ban(&db, &notifier, "repeated harassment".to_string())
                .await
                .unwrap();

            assert!(matches!(account.profile_status, ProfileStatus::Banned {}));
            assert!(account.moderation_flags.is_banned);
            assert_eq!(
                account.moderation_flags.ban_reason.as_deref(),
                Some("repeated harassment")
            );
            assert!(!account.visibility);
            assert!(db
                .fetch_queue_entries_by_user(&account.id)
                .await
                .unwrap()
                .is_empty());

            // bans are terminal
            let err = account
                .suspend(&db, &notifier, "anything".to_string(), None)
                .await
                .unwrap_err();
            assert!(matches!(
                err.error_type,
                ErrorType::InvalidTransition { .. }
            ));
        });
    }
}
