use amoret_database::{AdminUser, Database, Report};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Report
///
/// Fetch a single report by its id.
#[openapi(tag = "Reports")]
#[get("/<report>")]
pub async fn fetch_report(
    db: &State<Database>,
    _moderator: AdminUser,
    report: String,
) -> Result<Json<Report>> {
    db.fetch_report(&report).await.map(Json)
}
