use crate::application::read_models::RiskReport;
use crate::ports::outbound::ReportFormatter;
use crate::risk_assessment::domain::Field;
use crate::shared::Result;
use anyhow::Context;
use csv::Writer;

/// CsvFormatter adapter exporting the selected vendors as a roster table
///
/// The columns are the persisted roster layout, so the output can be fed
/// back in with `--input`.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &RiskReport) -> Result<String> {
        let mut writer = Writer::from_writer(Vec::new());

        writer.write_record(Field::EXPORT_COLUMNS.iter().map(|f| f.header()))?;
        for row in &report.vendors {
            writer.write_record(row.values().map(|v| v.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}
