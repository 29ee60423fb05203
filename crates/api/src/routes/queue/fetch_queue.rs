use amoret_database::{AdminUser, Database, ModerationQueueEntry};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Queue
///
/// Fetch the suspicious-profile queue, most suspicious first.
#[openapi(tag = "Moderation Queue")]
#[get("/")]
pub async fn fetch_queue(
    db: &State<Database>,
    _moderator: AdminUser,
) -> Result<Json<Vec<ModerationQueueEntry>>> {
    db.fetch_queue_entries().await.map(Json)
}
