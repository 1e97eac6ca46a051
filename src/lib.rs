//! vendor-risk - third-party vendor risk scoring
//!
//! This library scores a vendor roster (impact × likelihood risk score,
//! risk tier, AI vendor detection, OWASP LLM check, breach likelihood),
//! filters it by risk level, service type and country, and aggregates the
//! selection into a risk report. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`risk_assessment`): Vendor schema, scoring rules and aggregation
//! - **Application Layer** (`application`): Use cases, DTOs, read models and the dataset cache
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use vendor_risk::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let vendor_source = CsvVendorSource::new(PathBuf::from("vendors.csv"));
//! let owasp_assigner = RandomOwaspAssigner::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AssessVendorsUseCase::new(vendor_source, owasp_assigner, progress_reporter);
//!
//! // Execute
//! let filters = FilterCriteria {
//!     risk_levels: Some(vec![RiskLevel::High]),
//!     ..FilterCriteria::default()
//! };
//! let response = use_case.execute(AssessmentRequest::new(filters, 15))?;
//!
//! // Format output
//! let output = MarkdownFormatter::new().format(&response.report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod risk_assessment;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvVendorSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CsvFormatter, JsonFormatter, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::synthetic::{RandomOwaspAssigner, SyntheticVendorSource};
    pub use crate::application::dto::{
        AssessmentRequest, AssessmentResponse, AssessmentWarning, FilterCriteria, OutputFormat,
    };
    pub use crate::application::read_models::{RiskReport, RiskReportBuilder};
    pub use crate::application::use_cases::AssessVendorsUseCase;
    pub use crate::application::DatasetCache;
    pub use crate::ports::inbound::RiskAssessmentPort;
    pub use crate::ports::outbound::{
        OutputPresenter, OwaspAssigner, ProgressReporter, ReportFormatter, VendorSource,
    };
    pub use crate::risk_assessment::domain::{
        Dataset, Field, FilterSelection, Iso27001Compliance, NistCsfAdoption, NumericField,
        OwaspFinding, OwaspLlmCheck, OwaspRiskCategory, OwaspStatus, ProjectedRow,
        RawInteger, RawVendorRecord, RiskLevel, ScoredVendor, ServiceType, VendorProfile,
    };
    pub use crate::risk_assessment::policies::{
        BreachLikelihoodPolicy, RiskTierPolicy, HIGH_RISK_HEADLINE_THRESHOLD,
    };
    pub use crate::risk_assessment::services::{
        Aggregator, DatasetFingerprint, FilterPredicateBuilder, RosterValidator, ScoringEngine,
    };
    pub use crate::shared::error::{ExitCode, RiskError};
    pub use crate::shared::Result;
}
