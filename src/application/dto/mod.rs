/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between the CLI adapter and the use
/// case, keeping the domain layer isolated.
mod assessment_request;
mod assessment_response;
mod filter_criteria;
mod output_format;

pub use assessment_request::AssessmentRequest;
pub use assessment_response::{AssessmentResponse, AssessmentWarning};
pub use filter_criteria::FilterCriteria;
pub use output_format::OutputFormat;
