/// Mock implementations for testing
mod mock_owasp_assigner;
mod mock_progress_reporter;
mod mock_vendor_source;

pub use mock_owasp_assigner::MockOwaspAssigner;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_vendor_source::MockVendorSource;
