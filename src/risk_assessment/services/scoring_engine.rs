use crate::risk_assessment::domain::{
    OwaspFinding, OwaspLlmCheck, RiskLevel, ScoredVendor, ServiceType, VendorProfile,
};
use crate::risk_assessment::policies::{BreachLikelihoodPolicy, RiskTierPolicy};
use crate::shared::error::{FieldViolation, RecordRef, RiskError};

/// ScoringEngine derives risk metrics from a validated vendor profile.
///
/// All functions are pure and deterministic. The engine assumes validated
/// input (see `RosterValidator`) and is total over that domain; the only
/// source of variation, the OWASP finding of an AI vendor, is supplied by
/// the caller.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Impact x likelihood; always within 1-25 for validated ratings
    pub fn overall_risk_score(profile: &VendorProfile) -> u8 {
        profile.risk_impact.value() * profile.risk_likelihood.value()
    }

    /// Buckets a score into its tier.
    ///
    /// # Errors
    /// `ScoreOutOfRange` for 0 or anything above 25; such a score cannot come
    /// from a validated profile and is never bucketed silently.
    pub fn risk_level(score: u8) -> Result<RiskLevel, RiskError> {
        RiskTierPolicy::classify(score).ok_or(RiskError::ScoreOutOfRange { score })
    }

    pub fn is_ai_vendor(profile: &VendorProfile) -> bool {
        profile.service_type == ServiceType::AiModelProvider
    }

    /// `N/A` for non-AI vendors; otherwise the finding returned by `assign`.
    ///
    /// `assign` is only invoked for AI vendors.
    pub fn owasp_llm_check<F>(profile: &VendorProfile, assign: F) -> OwaspLlmCheck
    where
        F: FnOnce() -> OwaspFinding,
    {
        if Self::is_ai_vendor(profile) {
            OwaspLlmCheck::Assessed(assign())
        } else {
            OwaspLlmCheck::NotApplicable
        }
    }

    pub fn breach_likelihood_score(profile: &VendorProfile) -> u8 {
        BreachLikelihoodPolicy::score(
            profile.open_vulnerabilities,
            profile.iso27001_compliance,
            profile.incident_history,
        )
    }

    /// Computes every derived field and freezes the result.
    ///
    /// # Errors
    /// - `Validation` when `owasp_llm_check` disagrees with the vendor's AI status
    /// - `ScoreOutOfRange` if the score cannot be tiered
    pub fn score(
        profile: VendorProfile,
        owasp_llm_check: OwaspLlmCheck,
    ) -> Result<ScoredVendor, RiskError> {
        let is_ai = Self::is_ai_vendor(&profile);
        if is_ai == matches!(owasp_llm_check, OwaspLlmCheck::NotApplicable) {
            return Err(RiskError::Validation {
                violations: vec![FieldViolation {
                    record: RecordRef {
                        row: 0,
                        vendor_id: Some(profile.vendor_id.value() as i64),
                        vendor_name: profile.vendor_name.clone(),
                    },
                    field: "OWASP_LLM_Check",
                    reason: format!(
                        "'{}' does not match ServiceType '{}'",
                        owasp_llm_check, profile.service_type
                    ),
                }],
            });
        }

        let overall_risk_score = Self::overall_risk_score(&profile);
        let risk_level = Self::risk_level(overall_risk_score)?;
        let breach_likelihood_score = Self::breach_likelihood_score(&profile);

        Ok(ScoredVendor::new(
            profile,
            overall_risk_score,
            risk_level,
            owasp_llm_check,
            breach_likelihood_score,
        ))
    }
}
