use crate::application::dto::{AssessmentRequest, AssessmentResponse};
use crate::shared::Result;

/// RiskAssessmentPort - Inbound port for the vendor risk assessment use case
///
/// Adapters (the CLI today) call this to load a roster, apply a filter
/// selection and obtain the aggregated report.
pub trait RiskAssessmentPort {
    /// Runs one assessment over the configured vendor source
    ///
    /// # Errors
    /// Returns an error if:
    /// - The vendor source cannot be read
    /// - Any roster row fails validation or keys are duplicated
    fn assess(&self, request: AssessmentRequest) -> Result<AssessmentResponse>;
}
