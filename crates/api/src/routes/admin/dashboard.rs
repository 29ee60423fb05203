use amoret_database::{Account, AdminUser, Database, ModerationQueueEntry, Report};
use amoret_models::v0::ModerationStats;
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::tokio::try_join;
use rocket::State;
use schemars::JsonSchema;
use serde::Serialize;

/// # Admin Dashboard
#[derive(Serialize, JsonSchema, Debug)]
pub struct AdminDashboard {
    /// Profiles waiting for initial review
    pending_profiles: Vec<Account>,
    /// Reports not yet resolved
    open_reports: Vec<Report>,
    /// The suspicious-profile queue, most suspicious first
    queue: Vec<ModerationQueueEntry>,
    /// Workload counters
    stats: ModerationStats,
}

/// # Fetch Dashboard
///
/// Fetch the moderation workload in one call. The four queries run
/// concurrently and the dashboard only loads once all of them finish.
#[openapi(tag = "Admin")]
#[get("/dashboard")]
pub async fn dashboard(
    db: &State<Database>,
    _moderator: AdminUser,
) -> Result<Json<AdminDashboard>> {
    let (pending_profiles, open_reports, queue, stats) = try_join!(
        db.fetch_accounts_in_review(),
        db.fetch_reports(Some("pending")),
        db.fetch_queue_entries(),
        db.generate_moderation_stats()
    )?;

    Ok(Json(AdminDashboard {
        pending_profiles,
        open_reports,
        queue,
        stats,
    }))
}
