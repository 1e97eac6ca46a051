use crate::risk_assessment::domain::RiskLevel;

/// Highest score still bucketed as Low
pub const LOW_RISK_UPPER_BOUND: u8 = 8;

/// Highest score still bucketed as Medium
pub const MEDIUM_RISK_UPPER_BOUND: u8 = 16;

/// Highest reachable score (5 x 5)
pub const MAX_RISK_SCORE: u8 = 25;

/// Default threshold of the "high-risk vendors" headline metric.
///
/// Vendors count as high risk when their score is strictly greater than this
/// value. It is deliberately separate from [`MEDIUM_RISK_UPPER_BOUND`]: a
/// score of 16 counts in the headline metric but is still tiered Medium.
pub const HIGH_RISK_HEADLINE_THRESHOLD: u8 = 15;

/// RiskTierPolicy maps an overall risk score onto its tier.
///
/// Buckets are open on the left and closed on the right:
/// (0, 8] Low, (8, 16] Medium, (16, 25] High.
pub struct RiskTierPolicy;

impl RiskTierPolicy {
    /// Returns `None` for scores outside (0, 25].
    pub fn classify(score: u8) -> Option<RiskLevel> {
        match score {
            1..=LOW_RISK_UPPER_BOUND => Some(RiskLevel::Low),
            9..=MEDIUM_RISK_UPPER_BOUND => Some(RiskLevel::Medium),
            17..=MAX_RISK_SCORE => Some(RiskLevel::High),
            _ => None,
        }
    }
}
