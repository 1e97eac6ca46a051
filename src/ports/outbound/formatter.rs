use crate::application::read_models::RiskReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a risk report
///
/// Implementations cover JSON, Markdown and the CSV export table.
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &RiskReport) -> Result<String>;
}
