use amoret_database::{AdminUser, Database, Notifier, Report};
use amoret_models::v0::DataResolveReport;
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Resolve Report
///
/// Resolve a pending report. Resolutions other than `dismiss` also
/// apply the matching sanction to the reported account; the report
/// stays pending if that sanction fails.
#[openapi(tag = "Reports")]
#[post("/<report>/resolve", data = "<data>")]
pub async fn resolve_report(
    db: &State<Database>,
    notifier: &State<Notifier>,
    moderator: AdminUser,
    report: String,
    data: Json<DataResolveReport>,
) -> Result<Json<Report>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut report = db.fetch_report(&report).await?;
    report.resolve(db, notifier, &moderator.id, data).await?;
    Ok(Json(report))
}
