use amoret_database::{AdminUser, Database, Report};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Reports
///
/// Fetch reports, optionally filtered by status (`pending` or
/// `resolved`).
#[openapi(tag = "Reports")]
#[get("/?<status>")]
pub async fn fetch_reports(
    db: &State<Database>,
    _moderator: AdminUser,
    status: Option<String>,
) -> Result<Json<Vec<Report>>> {
    db.fetch_reports(status.as_deref()).await.map(Json)
}
