use amoret_result::Result;

use crate::MongoDb;
use crate::{PartialReport, Report};

use super::AbstractReports;

static COL: &str = "reports";

#[async_trait]
impl AbstractReports for MongoDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        query!(self, insert_one, COL, &report).map(|_| ())
    }

    /// Fetch a report from the database
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch reports, optionally filtered by status
    async fn fetch_reports(&self, status: Option<&str>) -> Result<Vec<Report>> {
        let mut projection = doc! {};
        if let Some(status) = status {
            projection.insert("status", status);
        }

        query!(self, find, COL, projection)
    }

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial).map(|_| ())
    }
}
