use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI pipelines use these to tell a failed run apart from a run that
/// found high-risk vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report produced; no high-risk gate tripped
    Success = 0,
    /// High-risk vendors selected while `--fail-on-high-risk` is set
    HighRiskDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable roster, validation failure, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::HighRiskDetected => write!(f, "High-Risk Vendors Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Identifies a roster row in error reports.
///
/// `row` is the 1-based data row position in the source (header excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub row: usize,
    pub vendor_id: Option<i64>,
    pub vendor_name: String,
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.row)?;
        match (self.vendor_id, self.vendor_name.trim()) {
            (Some(id), "") => write!(f, " (VendorID {})", id),
            (Some(id), name) => write!(f, " (VendorID {}, {})", id, name),
            (None, "") => Ok(()),
            (None, name) => write!(f, " ({})", name),
        }
    }
}

/// A single field that fell outside its declared domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub record: RecordRef,
    /// Column name as it appears in the roster table
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.record, self.field, self.reason)
    }
}

/// A key value shared by more than one roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    /// `VendorID` or `VendorName`
    pub column: &'static str,
    pub value: String,
    /// 1-based rows holding the value
    pub rows: Vec<usize>,
}

impl fmt::Display for DuplicateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self.rows.iter().map(|r| r.to_string()).collect();
        write!(
            f,
            "{} '{}' appears in rows {}",
            self.column,
            self.value,
            rows.join(", ")
        )
    }
}

fn render_lines<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors raised while loading, scoring and reporting on a vendor roster.
///
/// Validation failures abort the whole batch: partial loads are never
/// returned.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("Vendor roster failed validation ({} problem(s)):\n{}\n\n💡 Hint: Fix the listed fields; no vendors were loaded", .violations.len(), render_lines(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Vendor roster contains duplicate keys:\n{}\n\n💡 Hint: VendorID and VendorName must be unique across the roster", render_lines(.duplicates))]
    DuplicateKey { duplicates: Vec<DuplicateEntry> },

    #[error("Risk score {score} is outside the scored range 1-25")]
    ScoreOutOfRange { score: u8 },

    #[error("Vendor roster not found: {path}\n\n💡 Hint: {suggestion}")]
    RosterNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse vendor roster: {path}\nDetails: {details}\n\n💡 Hint: The roster must be a CSV table with the columns VendorName, ServiceType, Country, RiskImpact, RiskLikelihood, OpenVulnerabilities, IncidentHistory, ISO27001_Compliance and NIST_CSF_Adoption")]
    RosterParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },
}
