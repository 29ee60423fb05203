use amoret_database::{Account, AdminUser, Database, Notifier};
use amoret_models::v0::DataWarnUser;
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Warn User
///
/// Issue a warning against a user without changing their status.
#[openapi(tag = "User Moderation")]
#[post("/<target>/warn", data = "<data>")]
pub async fn warn_user(
    db: &State<Database>,
    notifier: &State<Notifier>,
    moderator: AdminUser,
    target: String,
    data: Json<DataWarnUser>,
) -> Result<Json<Account>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut account = db.fetch_account(&target).await?;
    account.warn(db, notifier, data.reason, &moderator.id).await?;
    Ok(Json(account))
}
