//! Risk report read model

use crate::risk_assessment::domain::{FilterSelection, ProjectedRow};
use crate::risk_assessment::services::{RiskMatrixCell, ValueCounts};
use serde::Serialize;

/// Everything a reporting layer needs for one filtered view of the roster
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub metadata: ReportMetadata,
    /// Selection the figures below were computed for
    pub filters: FilterSelection,
    pub key_indicators: KeyIndicators,
    /// Vendor counts per impact/likelihood pair, impact-major
    pub risk_matrix: Vec<RiskMatrixCell>,
    pub risk_level_distribution: ValueCounts,
    pub iso27001_distribution: ValueCounts,
    pub nist_csf_distribution: ValueCounts,
    /// Absent when the selection holds no AI model providers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_assessment: Option<AiVendorAssessment>,
    /// Selected vendors in the persisted column layout
    pub vendors: Vec<ProjectedRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339 creation time
    pub generated_at: String,
    /// `urn:uuid:` identifier, unique per report
    pub report_id: String,
    pub source: String,
    /// Hex SHA-256 of the raw roster the report was computed from
    pub dataset_fingerprint: String,
}

/// Headline figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyIndicators {
    /// Vendors in the roster before filtering
    pub loaded_vendors: usize,
    /// Vendors in the current selection
    pub total_vendors: usize,
    pub high_risk_threshold: u8,
    /// Selected vendors with an overall risk score above `high_risk_threshold`
    pub high_risk_vendors: usize,
    pub ai_vendors: usize,
    /// 0.0 when nothing is selected
    pub mean_breach_likelihood: f64,
}

/// OWASP LLM view of the selected AI model providers
#[derive(Debug, Clone, Serialize)]
pub struct AiVendorAssessment {
    pub total_ai_vendors: usize,
    pub vulnerable_ai_vendors: usize,
    /// Findings counted by OWASP risk category
    pub owasp_breakdown: ValueCounts,
    pub vendors: Vec<ProjectedRow>,
}
