/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: roster sources,
/// OWASP assignment, report formatters, presenters and console progress.
pub mod outbound;
