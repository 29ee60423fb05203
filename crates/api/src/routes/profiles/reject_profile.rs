use amoret_database::{Account, AdminUser, Database, Notifier};
use amoret_models::v0::DataRejectProfile;
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Reject Profile
///
/// Reject a pending profile with a canonical reason code. An optional
/// admin note is appended to the fix instructions.
#[openapi(tag = "Profile Review")]
#[post("/<target>/reject", data = "<data>")]
pub async fn reject_profile(
    db: &State<Database>,
    notifier: &State<Notifier>,
    _moderator: AdminUser,
    target: String,
    data: Json<DataRejectProfile>,
) -> Result<Json<Account>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut account = db.fetch_account(&target).await?;
    account.reject(db, notifier, data).await?;
    Ok(Json(account))
}
