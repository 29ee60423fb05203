use amoret_database::{Account, AdminUser, Database, Notifier};
use amoret_models::v0::DataBanUser;
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Ban User
///
/// Permanently ban a user and purge them from the moderation queue.
/// Reversible only through a manually reviewed appeal.
#[openapi(tag = "User Moderation")]
#[post("/<target>/ban", data = "<data>")]
pub async fn ban_user(
    db: &State<Database>,
    notifier: &State<Notifier>,
    _moderator: AdminUser,
    target: String,
    data: Json<DataBanUser>,
) -> Result<Json<Account>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut account = db.fetch_account(&target).await?;
    account.ban(db, notifier, data.reason).await?;
    Ok(Json(account))
}
