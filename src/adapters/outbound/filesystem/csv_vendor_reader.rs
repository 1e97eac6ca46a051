use crate::ports::outbound::VendorSource;
use crate::risk_assessment::domain::{Field, RawVendorRecord};
use crate::shared::error::RiskError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::PathBuf;

/// Export columns that are always recomputed on load
const DERIVED_COLUMNS: [Field; 3] = [
    Field::OverallRiskScore,
    Field::IsAiVendor,
    Field::BreachLikelihoodScore,
];

/// CsvVendorSource adapter reading a roster table from disk
///
/// Accepts both a bare roster (raw columns only) and a previously exported
/// table. `VendorID` and `OWASP_LLM_Check` are optional; other derived
/// columns are ignored and recomputed.
pub struct CsvVendorSource {
    path: PathBuf,
}

impl CsvVendorSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn read_content(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(RiskError::RosterNotFound {
                path: self.path.clone(),
                suggestion: "Pass an existing CSV roster with --input, or use --synthetic N to generate one".to_string(),
            }
            .into());
        }

        validate_input_file(&self.path, "vendor roster").map_err(|e| RiskError::FileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        fs::read_to_string(&self.path).map_err(|e| {
            RiskError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse_error(&self, details: impl Into<String>) -> anyhow::Error {
        RiskError::RosterParseError {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn parse(&self, content: &str) -> Result<Vec<RawVendorRecord>> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| self.parse_error(e.to_string()))?
            .clone();
        let derived: Vec<&str> = DERIVED_COLUMNS
            .iter()
            .map(|f| f.header())
            .filter(|header| headers.iter().any(|h| h == *header))
            .collect();
        if !derived.is_empty() {
            log::info!(
                "Recomputing derived column(s) {} from raw fields",
                derived.join(", ")
            );
        }

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize::<RawVendorRecord>().enumerate() {
            let record =
                result.map_err(|e| self.parse_error(format!("data row {}: {}", idx + 1, e)))?;
            records.push(record);
        }

        log::debug!("Read {} roster row(s) from {}", records.len(), self.path.display());
        Ok(records)
    }
}

impl VendorSource for CsvVendorSource {
    fn read_vendors(&self) -> Result<Vec<RawVendorRecord>> {
        let content = self.read_content()?;
        self.parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
