/// Result alias used by the application and adapter layers.
///
/// Domain operations return `std::result::Result<T, RiskError>` so callers can
/// match on the structured failure; everything above the domain propagates
/// through `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
