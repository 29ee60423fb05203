use amoret_models::v0::{DataReportUser, DataResolveReport, ReportReason, ReportResolution, ReportStatus};
use iso8601_timestamp::Timestamp;
use ulid::Ulid;

use amoret_result::Result;

use crate::{Database, Notifier};

auto_derived_partial!(
    /// # Report
    ///
    /// User-submitted complaint against another member
    pub struct Report {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user filing the report
        pub reporter_id: String,
        /// Id of the user being reported
        pub reported_user_id: String,
        /// Category selected by the reporter
        pub reason: ReportReason,
        /// Additional free-text context
        #[serde(default)]
        pub additional_details: String,
        /// Status of the report
        #[opt_passthrough]
        #[serde(flatten)]
        pub status: ReportStatus,
        /// When the report was filed
        pub timestamp: Timestamp,
    },
    "PartialReport"
);

#[allow(clippy::disallowed_methods)]
impl Report {
    /// File a new report
    pub async fn create(
        db: &Database,
        reporter_id: String,
        data: DataReportUser,
    ) -> Result<Report> {
        if reporter_id == data.id {
            return Err(create_error!(CannotReportYourself));
        }

        // the reported account must exist
        db.fetch_account(&data.id).await?;

        let report = Report {
            id: Ulid::new().to_string(),
            reporter_id,
            reported_user_id: data.id,
            reason: data.reason,
            additional_details: data.additional_details,
            status: ReportStatus::Pending {},
            timestamp: Timestamp::now_utc(),
        };

        db.insert_report(&report).await?;
        Ok(report)
    }

    /// Resolve this report, applying the chosen sanction
    ///
    /// The account is sanctioned before the report is closed so a
    /// failed sanction leaves the report pending for another attempt.
    pub async fn resolve(
        &mut self,
        db: &Database,
        notifier: &Notifier,
        moderator_id: &str,
        data: DataResolveReport,
    ) -> Result<()> {
        if !matches!(self.status, ReportStatus::Pending {}) {
            return Err(create_error!(AlreadyResolved));
        }

        let reason = data
            .reason
            .clone()
            .unwrap_or_else(|| self.reason.name().to_string());

        match data.resolution {
            ReportResolution::Dismiss => {}
            ReportResolution::Warn => {
                let mut account = db.fetch_account(&self.reported_user_id).await?;
                account.warn(db, notifier, reason, moderator_id).await?;
            }
            ReportResolution::Suspend => {
                let mut account = db.fetch_account(&self.reported_user_id).await?;
                account.suspend(db, notifier, reason, None).await?;
            }
            ReportResolution::Ban => {
                let mut account = db.fetch_account(&self.reported_user_id).await?;
                account.ban(db, notifier, reason).await?;
            }
        }

        let partial = PartialReport {
            status: Some(ReportStatus::Resolved {
                resolution: data.resolution,
                resolution_reason: data.reason,
                resolved_at: Timestamp::now_utc(),
                resolved_by: moderator_id.to_string(),
            }),
            ..Default::default()
        };

        db.update_report(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use amoret_models::v0::{
        DataReportUser, DataResolveReport, ReportReason, ReportResolution, ReportStatus,
    };
    use amoret_result::ErrorType;

    use crate::{Account, Notifier, ReferenceNotifier, Report};

    #[async_std::test]
    async fn resolve_dismiss_leaves_account_untouched() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut reported = Account::create(&db, "kai".to_string()).await.unwrap();
            reported.approve(&db, &notifier).await.unwrap();

            let mut report = Report::create(
                &db,
                "reporter".to_string(),
                DataReportUser {
                    id: reported.id.to_string(),
                    reason: ReportReason::SpamAbuse,
                    additional_details: "keeps sending links".to_string(),
                },
            )
            .await
            .unwrap();

            report
                .resolve(
                    &db,
                    &notifier,
                    "mod_01",
                    DataResolveReport {
                        resolution: ReportResolution::Dismiss,
                        reason: None,
                    },
                )
                .await
                .unwrap();

            assert!(matches!(report.status, ReportStatus::Resolved { .. }));

            let account = db.fetch_account(&reported.id).await.unwrap();
            assert!(account.visibility);
            assert_eq!(account.moderation_flags.warning_count, 0);

            // a report can only be resolved once
            let err = report
                .resolve(
                    &db,
                    &notifier,
                    "mod_01",
                    DataResolveReport {
                        resolution: ReportResolution::Warn,
                        reason: None,
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::AlreadyResolved));
        });
    }

    #[async_std::test]
    async fn resolve_ban_sanctions_account() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut reported = Account::create(&db, "pavel".to_string()).await.unwrap();
            reported.approve(&db, &notifier).await.unwrap();

            let mut report = Report::create(
                &db,
                "reporter".to_string(),
                DataReportUser {
                    id: reported.id.to_string(),
                    reason: ReportReason::Harassment,
                    additional_details: String::new(),
                },
            )
            .await
            .unwrap();

            report
                .resolve(
                    &db,
                    &notifier,
                    "mod_02",
                    DataResolveReport {
                        resolution: ReportResolution::Ban,
                        reason: Some("repeated harassment".to_string()),
                    },
                )
                .await
                .unwrap();

            let account = db.fetch_account(&reported.id).await.unwrap();
            assert!(account.moderation_flags.is_banned);
            assert_eq!(
                account.moderation_flags.ban_reason.as_deref(),
                Some("repeated harassment")
            );

            match db.fetch_report(&report.id).await.unwrap().status {
                ReportStatus::Resolved {
                    resolution,
                    resolved_by,
                    ..
                } => {
                    assert_eq!(resolution, ReportResolution::Ban);
                    assert_eq!(resolved_by, "mod_02");
                }
                status => panic!("unexpected status {status:?}"),
            }
        });
    }

    #[async_std::test]
    async fn failed_sanction_leaves_report_pending() {
        database_test!(|db| async move {
            let notifier = Notifier::Reference(ReferenceNotifier::default());

            let mut reported = Account::create(&db, "lena".to_string()).await.unwrap();
            reported.approve(&db, &notifier).await.unwrap();

            let mut report = Report::create(
                &db,
                "reporter".to_string(),
                DataReportUser {
                    id: reported.id.to_string(),
                    reason: ReportReason::FakeProfile,
                    additional_details: String::new(),
                },
            )
            .await
            .unwrap();

            // the account is banned out-of-band, so a second ban is
            // an invalid transition and the report must stay open
            reported
                .ban(&db, &notifier, "separate incident".to_string())
                .await
                .unwrap();

            let err = report
                .resolve(
                    &db,
                    &notifier,
                    "mod_01",
                    DataResolveReport {
                        resolution: ReportResolution::Ban,
                        reason: None,
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(
                err.error_type,
                ErrorType::InvalidTransition { .. }
            ));

            let fetched = db.fetch_report(&report.id).await.unwrap();
            assert!(matches!(fetched.status, ReportStatus::Pending {}));
        });
    }
}
