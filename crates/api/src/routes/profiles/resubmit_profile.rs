use amoret_database::{Account, AdminUser, Database};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Resubmit Profile
///
/// Put a rejected profile back into review after the user edited it.
/// Called by the app backend on the user's behalf.
#[openapi(tag = "Profile Review")]
#[post("/<target>/resubmit")]
pub async fn resubmit_profile(
    db: &State<Database>,
    _moderator: AdminUser,
    target: String,
) -> Result<Json<Account>> {
    let mut account = db.fetch_account(&target).await?;
    account.resubmit(db).await?;
    Ok(Json(account))
}
