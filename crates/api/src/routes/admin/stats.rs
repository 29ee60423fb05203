use amoret_database::{AdminUser, Database};
use amoret_models::v0::ModerationStats;
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Query Stats
///
/// Fetch moderation workload statistics.
#[openapi(tag = "Admin")]
#[get("/stats")]
pub async fn stats(
    db: &State<Database>,
    _moderator: AdminUser,
) -> Result<Json<ModerationStats>> {
    db.generate_moderation_stats().await.map(Json)
}
