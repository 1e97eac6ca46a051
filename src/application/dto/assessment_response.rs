use crate::application::read_models::RiskReport;
use std::fmt;

/// Non-fatal conditions worth telling the user about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentWarning {
    /// The filter selection matched none of the loaded vendors
    EmptyResult { total_vendors: usize },
    /// No AI model providers were selected, so there is no OWASP section
    NoAiVendors,
}

impl fmt::Display for AssessmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentWarning::EmptyResult { total_vendors } => write!(
                f,
                "No vendors match the current filters ({} vendor(s) loaded)",
                total_vendors
            ),
            AssessmentWarning::NoAiVendors => {
                write!(f, "No AI model providers in the current selection")
            }
        }
    }
}

/// AssessmentResponse - Result of one assessment run
#[derive(Debug, Clone)]
pub struct AssessmentResponse {
    pub report: RiskReport,
    pub warnings: Vec<AssessmentWarning>,
    /// Whether any selected vendor scored above the high-risk threshold.
    /// Used to determine exit code for CI integration
    pub has_high_risk_vendors: bool,
}

impl AssessmentResponse {
    pub fn new(report: RiskReport, warnings: Vec<AssessmentWarning>) -> Self {
        let has_high_risk_vendors = report.key_indicators.high_risk_vendors > 0;
        Self {
            report,
            warnings,
            has_high_risk_vendors,
        }
    }
}
