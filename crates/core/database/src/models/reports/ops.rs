use amoret_result::Result;

use crate::{PartialReport, Report};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch a report from the database
    async fn fetch_report(&self, id: &str) -> Result<Report>;

    /// Fetch reports, optionally filtered by status
    async fn fetch_reports(&self, status: Option<&str>) -> Result<Vec<Report>>;

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()>;
}
