use crate::risk_assessment::domain::Iso27001Compliance;

/// BreachLikelihoodPolicy encodes the weighted scorecard behind the breach
/// likelihood score.
///
/// This is a heuristic indicator on a 0-100 scale, not a fitted model: the
/// output must not be presented as a calibrated probability.
///
/// score = open_vulnerabilities * 0.5 + compliance penalty + incidents * 15,
/// truncated toward zero and capped at 100.
pub struct BreachLikelihoodPolicy;

impl BreachLikelihoodPolicy {
    /// Upper bound of the score
    pub const MAX_SCORE: u8 = 100;

    /// Points per past incident
    pub const INCIDENT_WEIGHT: u64 = 15;

    /// Open vulnerabilities per point (each one weighs 0.5)
    pub const VULNERABILITIES_PER_POINT: u64 = 2;

    pub fn compliance_penalty(compliance: Iso27001Compliance) -> u64 {
        match compliance {
            Iso27001Compliance::NonCompliant => 20,
            Iso27001Compliance::PartiallyCompliant => 10,
            Iso27001Compliance::Compliant => 0,
        }
    }

    pub fn score(
        open_vulnerabilities: u32,
        compliance: Iso27001Compliance,
        incident_history: u32,
    ) -> u8 {
        // Integer division truncates the 0.5 weight exactly as truncating the
        // float sum would, because the other terms are whole numbers.
        let raw = open_vulnerabilities as u64 / Self::VULNERABILITIES_PER_POINT
            + Self::compliance_penalty(compliance)
            + incident_history as u64 * Self::INCIDENT_WEIGHT;
        raw.min(Self::MAX_SCORE as u64) as u8
    }
}
