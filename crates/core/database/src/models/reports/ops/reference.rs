use amoret_result::Result;

use crate::ReferenceDb;
use crate::{PartialReport, Report};

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.contains_key(&report.id) {
            Err(create_database_error!("insert", "report"))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch a report from the database
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        let reports = self.reports.lock().await;
        reports
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch reports, optionally filtered by status
    async fn fetch_reports(&self, status: Option<&str>) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        Ok(reports
            .values()
            .filter(|report| match status {
                Some(status) => report.status.name() == status,
                None => true,
            })
            .cloned()
            .collect())
    }

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if let Some(report) = reports.get_mut(id) {
            report.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
