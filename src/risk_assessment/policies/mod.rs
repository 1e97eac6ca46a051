mod breach_likelihood;
mod risk_thresholds;

pub use breach_likelihood::BreachLikelihoodPolicy;
pub use risk_thresholds::{
    RiskTierPolicy, HIGH_RISK_HEADLINE_THRESHOLD, LOW_RISK_UPPER_BOUND, MAX_RISK_SCORE,
    MEDIUM_RISK_UPPER_BOUND,
};
