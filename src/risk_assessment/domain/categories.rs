//! Closed categorical domains of the vendor roster.
//!
//! Every enum parses from, and displays as, the exact label used in the
//! roster table, so an out-of-domain value can only exist as a raw string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parses `input` (surrounding whitespace ignored) against the display
/// labels of `variants`.
fn parse_label<T: Copy + fmt::Display>(input: &str, variants: &[T]) -> Result<T, String> {
    let trimmed = input.trim();
    variants
        .iter()
        .copied()
        .find(|variant| variant.to_string() == trimmed)
        .ok_or_else(|| {
            let allowed: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
            format!("'{}' is not one of: {}", trimmed, allowed.join(", "))
        })
}

/// Kind of service a vendor provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Cloud Services")]
    CloudServices,
    #[serde(rename = "SaaS Platform")]
    SaasPlatform,
    #[serde(rename = "Data Processor")]
    DataProcessor,
    #[serde(rename = "AI Model Provider")]
    AiModelProvider,
    #[serde(rename = "Managed IT")]
    ManagedIt,
    Consulting,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::CloudServices,
        ServiceType::SaasPlatform,
        ServiceType::DataProcessor,
        ServiceType::AiModelProvider,
        ServiceType::ManagedIt,
        ServiceType::Consulting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::CloudServices => "Cloud Services",
            ServiceType::SaasPlatform => "SaaS Platform",
            ServiceType::DataProcessor => "Data Processor",
            ServiceType::AiModelProvider => "AI Model Provider",
            ServiceType::ManagedIt => "Managed IT",
            ServiceType::Consulting => "Consulting",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL)
    }
}

/// ISO/IEC 27001 certification status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Iso27001Compliance {
    Compliant,
    #[serde(rename = "Partially Compliant")]
    PartiallyCompliant,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

impl Iso27001Compliance {
    pub const ALL: [Iso27001Compliance; 3] = [
        Iso27001Compliance::Compliant,
        Iso27001Compliance::PartiallyCompliant,
        Iso27001Compliance::NonCompliant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Iso27001Compliance::Compliant => "Compliant",
            Iso27001Compliance::PartiallyCompliant => "Partially Compliant",
            Iso27001Compliance::NonCompliant => "Non-Compliant",
        }
    }
}

impl fmt::Display for Iso27001Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Iso27001Compliance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL)
    }
}

/// Maturity of NIST Cybersecurity Framework adoption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NistCsfAdoption {
    High,
    Medium,
    Low,
}

impl NistCsfAdoption {
    pub const ALL: [NistCsfAdoption; 3] = [
        NistCsfAdoption::High,
        NistCsfAdoption::Medium,
        NistCsfAdoption::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NistCsfAdoption::High => "High",
            NistCsfAdoption::Medium => "Medium",
            NistCsfAdoption::Low => "Low",
        }
    }
}

impl fmt::Display for NistCsfAdoption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NistCsfAdoption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL)
    }
}

/// Coarse risk tier derived from the overall risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL)
    }
}
