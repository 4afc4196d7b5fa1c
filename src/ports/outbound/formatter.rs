use crate::application::dto::AnalyticsReport;
use crate::shared::Result;

/// ReportFormatter port for turning a report into its textual output
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &AnalyticsReport) -> Result<String>;
}
