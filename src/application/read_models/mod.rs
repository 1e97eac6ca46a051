//! Read models for the reporting side
//!
//! View-optimized, plain-data structs derived from a filtered dataset.
//! Formatters render these and never touch the domain directly.

pub mod risk_report;
pub mod risk_report_builder;

pub use risk_report::{AiVendorAssessment, KeyIndicators, ReportMetadata, RiskReport};
pub use risk_report_builder::RiskReportBuilder;
