use amoret_database::{AdminUser, Database};
use amoret_result::Result;
use rocket::State;
use rocket_empty::EmptyResponse;

/// # Dismiss Queue Entry
///
/// Remove an entry from the queue without touching the account.
#[openapi(tag = "Moderation Queue")]
#[delete("/<entry>")]
pub async fn dismiss_entry(
    db: &State<Database>,
    _moderator: AdminUser,
    entry: String,
) -> Result<EmptyResponse> {
    let entry = db.fetch_queue_entry(&entry).await?;
    entry.dismiss(db).await.map(|_| EmptyResponse)
}
