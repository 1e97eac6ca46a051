use super::categories::{Iso27001Compliance, NistCsfAdoption, RiskLevel, ServiceType};
use super::owasp::OwaspLlmCheck;
use std::fmt;

/// Lowest value on the impact and likelihood axes
pub const MIN_RATING: u8 = 1;

/// Highest value on the impact and likelihood axes
pub const MAX_RATING: u8 = 5;

/// NewType wrapper for the unique vendor identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VendorId(u32);

impl VendorId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity or probability rating on the closed 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiskRating(u8);

impl RiskRating {
    /// Returns `None` when `value` is outside 1-5.
    pub fn new(value: i64) -> Option<Self> {
        if (MIN_RATING as i64..=MAX_RATING as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated raw attributes of one vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorProfile {
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub service_type: ServiceType,
    pub country: String,
    pub risk_impact: RiskRating,
    pub risk_likelihood: RiskRating,
    pub open_vulnerabilities: u32,
    pub incident_history: u32,
    pub iso27001_compliance: Iso27001Compliance,
    pub nist_csf_adoption: NistCsfAdoption,
}

/// A vendor together with its derived risk metrics.
///
/// Only the scoring engine constructs this type, so the derived fields
/// always agree with the profile they were computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredVendor {
    profile: VendorProfile,
    overall_risk_score: u8,
    risk_level: RiskLevel,
    owasp_llm_check: OwaspLlmCheck,
    breach_likelihood_score: u8,
}

impl ScoredVendor {
    pub(crate) fn new(
        profile: VendorProfile,
        overall_risk_score: u8,
        risk_level: RiskLevel,
        owasp_llm_check: OwaspLlmCheck,
        breach_likelihood_score: u8,
    ) -> Self {
        Self {
            profile,
            overall_risk_score,
            risk_level,
            owasp_llm_check,
            breach_likelihood_score,
        }
    }

    pub fn profile(&self) -> &VendorProfile {
        &self.profile
    }

    pub fn vendor_id(&self) -> VendorId {
        self.profile.vendor_id
    }

    pub fn vendor_name(&self) -> &str {
        &self.profile.vendor_name
    }

    pub fn service_type(&self) -> ServiceType {
        self.profile.service_type
    }

    pub fn country(&self) -> &str {
        &self.profile.country
    }

    pub fn risk_impact(&self) -> RiskRating {
        self.profile.risk_impact
    }

    pub fn risk_likelihood(&self) -> RiskRating {
        self.profile.risk_likelihood
    }

    pub fn open_vulnerabilities(&self) -> u32 {
        self.profile.open_vulnerabilities
    }

    pub fn incident_history(&self) -> u32 {
        self.profile.incident_history
    }

    pub fn iso27001_compliance(&self) -> Iso27001Compliance {
        self.profile.iso27001_compliance
    }

    pub fn nist_csf_adoption(&self) -> NistCsfAdoption {
        self.profile.nist_csf_adoption
    }

    pub fn overall_risk_score(&self) -> u8 {
        self.overall_risk_score
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn is_ai_vendor(&self) -> bool {
        self.profile.service_type == ServiceType::AiModelProvider
    }

    pub fn owasp_llm_check(&self) -> &OwaspLlmCheck {
        &self.owasp_llm_check
    }

    pub fn breach_likelihood_score(&self) -> u8 {
        self.breach_likelihood_score
    }
}
