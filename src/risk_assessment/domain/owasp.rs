//! OWASP Top 10 for LLM Applications classification of AI vendors.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Separator between category and status in a persisted check value
pub const CHECK_SEPARATOR: &str = ": ";

/// Value stored for vendors that are not AI model providers
pub const NOT_APPLICABLE: &str = "N/A";

/// LLM-specific risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwaspRiskCategory {
    PromptInjection,
    DataLeakage,
    InsecureOutput,
    ModelTheft,
}

impl OwaspRiskCategory {
    pub const ALL: [OwaspRiskCategory; 4] = [
        OwaspRiskCategory::PromptInjection,
        OwaspRiskCategory::DataLeakage,
        OwaspRiskCategory::InsecureOutput,
        OwaspRiskCategory::ModelTheft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OwaspRiskCategory::PromptInjection => "Prompt Injection",
            OwaspRiskCategory::DataLeakage => "Data Leakage",
            OwaspRiskCategory::InsecureOutput => "Insecure Output",
            OwaspRiskCategory::ModelTheft => "Model Theft",
        }
    }
}

impl fmt::Display for OwaspRiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mitigation status of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwaspStatus {
    Vulnerable,
    Mitigated,
}

impl OwaspStatus {
    pub const ALL: [OwaspStatus; 2] = [OwaspStatus::Vulnerable, OwaspStatus::Mitigated];

    pub fn as_str(&self) -> &'static str {
        match self {
            OwaspStatus::Vulnerable => "Vulnerable",
            OwaspStatus::Mitigated => "Mitigated",
        }
    }
}

impl fmt::Display for OwaspStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One category/status pair, e.g. `Prompt Injection: Vulnerable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwaspFinding {
    pub category: OwaspRiskCategory,
    pub status: OwaspStatus,
}

impl OwaspFinding {
    pub fn new(category: OwaspRiskCategory, status: OwaspStatus) -> Self {
        Self { category, status }
    }
}

impl fmt::Display for OwaspFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.category, CHECK_SEPARATOR, self.status)
    }
}

impl FromStr for OwaspFinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (category, status) = trimmed.split_once(CHECK_SEPARATOR).ok_or_else(|| {
            format!(
                "'{}' is not in the form '<Category>{}<Status>'",
                trimmed, CHECK_SEPARATOR
            )
        })?;

        let category = OwaspRiskCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == category.trim())
            .ok_or_else(|| format!("'{}' is not a known OWASP LLM risk category", category))?;
        let status = OwaspStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == status.trim())
            .ok_or_else(|| format!("'{}' is not a known OWASP LLM status", status))?;

        Ok(Self { category, status })
    }
}

/// Outcome of the OWASP LLM check for a vendor
///
/// `NotApplicable` exactly when the vendor is not an AI model provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwaspLlmCheck {
    NotApplicable,
    Assessed(OwaspFinding),
}

impl OwaspLlmCheck {
    pub fn finding(&self) -> Option<&OwaspFinding> {
        match self {
            OwaspLlmCheck::NotApplicable => None,
            OwaspLlmCheck::Assessed(finding) => Some(finding),
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        matches!(
            self,
            OwaspLlmCheck::Assessed(OwaspFinding {
                status: OwaspStatus::Vulnerable,
                ..
            })
        )
    }
}

impl fmt::Display for OwaspLlmCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwaspLlmCheck::NotApplicable => f.write_str(NOT_APPLICABLE),
            OwaspLlmCheck::Assessed(finding) => write!(f, "{}", finding),
        }
    }
}

impl FromStr for OwaspLlmCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == NOT_APPLICABLE {
            Ok(OwaspLlmCheck::NotApplicable)
        } else {
            s.parse().map(OwaspLlmCheck::Assessed)
        }
    }
}

impl Serialize for OwaspLlmCheck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
