use amoret_database::{Account, AdminUser, Database, Notifier};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Approve Profile
///
/// Approve a pending profile, making it visible in discovery.
#[openapi(tag = "Profile Review")]
#[post("/<target>/approve")]
pub async fn approve_profile(
    db: &State<Database>,
    notifier: &State<Notifier>,
    _moderator: AdminUser,
    target: String,
) -> Result<Json<Account>> {
    let mut account = db.fetch_account(&target).await?;
    account.approve(db, notifier).await?;
    Ok(Json(account))
}
