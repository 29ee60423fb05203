use amoret_database::{Account, AdminUser, Database, Notifier};
use amoret_models::v0::DataSuspendUser;
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Suspend User
///
/// Suspend a user, hiding their profile until the suspension lapses.
/// Uses the configured default length when `days` is omitted.
#[openapi(tag = "User Moderation")]
#[post("/<target>/suspend", data = "<data>")]
pub async fn suspend_user(
    db: &State<Database>,
    notifier: &State<Notifier>,
    _moderator: AdminUser,
    target: String,
    data: Json<DataSuspendUser>,
) -> Result<Json<Account>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut account = db.fetch_account(&target).await?;
    account.suspend(db, notifier, data.reason, data.days).await?;
    Ok(Json(account))
}
