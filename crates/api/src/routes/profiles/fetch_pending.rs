use amoret_database::{Account, AdminUser, Database};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Pending Profiles
///
/// Fetch all profiles waiting for initial review.
#[openapi(tag = "Profile Review")]
#[get("/pending")]
pub async fn fetch_pending(
    db: &State<Database>,
    _moderator: AdminUser,
) -> Result<Json<Vec<Account>>> {
    db.fetch_accounts_in_review().await.map(Json)
}
