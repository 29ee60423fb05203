use amoret_database::{AdminUser, Database, Report};
use amoret_models::v0::{DataReportUser, ReportReason};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// # Report Data
#[derive(Validate, Deserialize, JsonSchema)]
pub struct DataCreateReport {
    /// Id of the user filing the report, supplied by the app backend
    #[validate(length(min = 1, max = 64))]
    reporter_id: String,
    /// Id of the user being reported
    #[validate(length(min = 1, max = 64))]
    reported_user_id: String,
    /// Reason for the report
    reason: ReportReason,
    /// Additional free-text context
    #[validate(length(min = 0, max = 1000))]
    #[serde(default)]
    additional_details: String,
}

/// # File Report
///
/// File a report against a user on behalf of the reporting member.
#[openapi(tag = "Reports")]
#[post("/", data = "<data>")]
pub async fn create_report(
    db: &State<Database>,
    _moderator: AdminUser,
    data: Json<DataCreateReport>,
) -> Result<Json<Report>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let report = Report::create(
        db,
        data.reporter_id,
        DataReportUser {
            id: data.reported_user_id,
            reason: data.reason,
            additional_details: data.additional_details,
        },
    )
    .await?;

    Ok(Json(report))
}
