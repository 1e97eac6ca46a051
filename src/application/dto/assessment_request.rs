use super::FilterCriteria;
use crate::risk_assessment::policies::HIGH_RISK_HEADLINE_THRESHOLD;

/// AssessmentRequest - Internal request DTO for the assessment use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRequest {
    /// Category selection applied before aggregation
    pub filters: FilterCriteria,
    /// Vendors with an overall risk score strictly above this count as high risk
    pub high_risk_threshold: u8,
}

impl AssessmentRequest {
    pub fn new(filters: FilterCriteria, high_risk_threshold: u8) -> Self {
        Self {
            filters,
            high_risk_threshold,
        }
    }
}

impl Default for AssessmentRequest {
    fn default() -> Self {
        Self::new(FilterCriteria::default(), HIGH_RISK_HEADLINE_THRESHOLD)
    }
}
