use amoret_database::{AdminUser, Appeal, Database};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Appeals
///
/// Fetch appeals, optionally filtered by status (`pending`,
/// `approved` or `denied`).
#[openapi(tag = "Appeals")]
#[get("/?<status>")]
pub async fn fetch_appeals(
    db: &State<Database>,
    _moderator: AdminUser,
    status: Option<String>,
) -> Result<Json<Vec<Appeal>>> {
    db.fetch_appeals(status.as_deref()).await.map(Json)
}
