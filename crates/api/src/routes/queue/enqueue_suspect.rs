use amoret_database::{AdminUser, Database, ModerationQueueEntry};
use amoret_models::v0::DataEnqueueSuspect;
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Enqueue Suspect
///
/// Queue a profile for human review. Called by the upstream automated
/// scorer; entries are advisory and never mutate the account.
#[openapi(tag = "Moderation Queue")]
#[post("/", data = "<data>")]
pub async fn enqueue_suspect(
    db: &State<Database>,
    _moderator: AdminUser,
    data: Json<DataEnqueueSuspect>,
) -> Result<Json<ModerationQueueEntry>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    ModerationQueueEntry::create(db, data).await.map(Json)
}
