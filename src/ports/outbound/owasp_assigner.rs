use crate::risk_assessment::domain::OwaspFinding;

/// OwaspAssigner port supplying the OWASP LLM finding for an AI vendor
///
/// Today the only adapter draws at random for synthetic data. A scanner
/// backed adapter would replace it without touching scoring.
pub trait OwaspAssigner {
    fn assign(&self) -> OwaspFinding;
}
