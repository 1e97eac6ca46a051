/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach data sources, randomness, formatting and the console.
pub mod formatter;
pub mod output_presenter;
pub mod owasp_assigner;
pub mod progress_reporter;
pub mod vendor_source;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use owasp_assigner::OwaspAssigner;
pub use progress_reporter::ProgressReporter;
pub use vendor_source::VendorSource;
