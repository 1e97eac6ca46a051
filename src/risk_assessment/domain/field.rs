//! Column model used for projection, export and aggregation.

use super::vendor::ScoredVendor;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A column of the scored vendor table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    VendorId,
    VendorName,
    ServiceType,
    Country,
    RiskImpact,
    RiskLikelihood,
    OpenVulnerabilities,
    IncidentHistory,
    Iso27001Compliance,
    NistCsfAdoption,
    OverallRiskScore,
    IsAiVendor,
    OwaspLlmCheck,
    BreachLikelihoodScore,
    RiskLevel,
}

impl Field {
    /// Columns of the persisted table, in order
    pub const EXPORT_COLUMNS: [Field; 14] = [
        Field::VendorId,
        Field::VendorName,
        Field::ServiceType,
        Field::Country,
        Field::RiskImpact,
        Field::RiskLikelihood,
        Field::OpenVulnerabilities,
        Field::IncidentHistory,
        Field::Iso27001Compliance,
        Field::NistCsfAdoption,
        Field::OverallRiskScore,
        Field::IsAiVendor,
        Field::OwaspLlmCheck,
        Field::BreachLikelihoodScore,
    ];

    /// Column header as written in the roster table
    pub fn header(&self) -> &'static str {
        match self {
            Field::VendorId => "VendorID",
            Field::VendorName => "VendorName",
            Field::ServiceType => "ServiceType",
            Field::Country => "Country",
            Field::RiskImpact => "RiskImpact",
            Field::RiskLikelihood => "RiskLikelihood",
            Field::OpenVulnerabilities => "OpenVulnerabilities",
            Field::IncidentHistory => "IncidentHistory",
            Field::Iso27001Compliance => "ISO27001_Compliance",
            Field::NistCsfAdoption => "NIST_CSF_Adoption",
            Field::OverallRiskScore => "OverallRiskScore",
            Field::IsAiVendor => "Is_AI_Vendor",
            Field::OwaspLlmCheck => "OWASP_LLM_Check",
            Field::BreachLikelihoodScore => "BreachLikelihoodScore",
            Field::RiskLevel => "RiskLevel",
        }
    }

    pub fn value(&self, vendor: &ScoredVendor) -> FieldValue {
        match self {
            Field::VendorId => FieldValue::Integer(vendor.vendor_id().value() as i64),
            Field::VendorName => FieldValue::Text(vendor.vendor_name().to_string()),
            Field::ServiceType => FieldValue::Text(vendor.service_type().to_string()),
            Field::Country => FieldValue::Text(vendor.country().to_string()),
            Field::IsAiVendor => FieldValue::Flag(vendor.is_ai_vendor()),
            Field::Iso27001Compliance => {
                FieldValue::Text(vendor.iso27001_compliance().to_string())
            }
            Field::NistCsfAdoption => FieldValue::Text(vendor.nist_csf_adoption().to_string()),
            Field::OwaspLlmCheck => FieldValue::Text(vendor.owasp_llm_check().to_string()),
            Field::RiskLevel => FieldValue::Text(vendor.risk_level().to_string()),
            Field::RiskImpact => FieldValue::Integer(vendor.risk_impact().value() as i64),
            Field::RiskLikelihood => FieldValue::Integer(vendor.risk_likelihood().value() as i64),
            Field::OpenVulnerabilities => {
                FieldValue::Integer(vendor.open_vulnerabilities() as i64)
            }
            Field::IncidentHistory => FieldValue::Integer(vendor.incident_history() as i64),
            Field::OverallRiskScore => FieldValue::Integer(vendor.overall_risk_score() as i64),
            Field::BreachLikelihoodScore => {
                FieldValue::Integer(vendor.breach_likelihood_score() as i64)
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Columns that hold numbers and can be averaged or thresholded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    RiskImpact,
    RiskLikelihood,
    OpenVulnerabilities,
    IncidentHistory,
    OverallRiskScore,
    BreachLikelihoodScore,
}

impl NumericField {
    pub fn value(&self, vendor: &ScoredVendor) -> f64 {
        match self {
            NumericField::RiskImpact => vendor.risk_impact().value() as f64,
            NumericField::RiskLikelihood => vendor.risk_likelihood().value() as f64,
            NumericField::OpenVulnerabilities => vendor.open_vulnerabilities() as f64,
            NumericField::IncidentHistory => vendor.incident_history() as f64,
            NumericField::OverallRiskScore => vendor.overall_risk_score() as f64,
            NumericField::BreachLikelihoodScore => vendor.breach_likelihood_score() as f64,
        }
    }
}

impl From<NumericField> for Field {
    fn from(field: NumericField) -> Self {
        match field {
            NumericField::RiskImpact => Field::RiskImpact,
            NumericField::RiskLikelihood => Field::RiskLikelihood,
            NumericField::OpenVulnerabilities => Field::OpenVulnerabilities,
            NumericField::IncidentHistory => Field::IncidentHistory,
            NumericField::OverallRiskScore => Field::OverallRiskScore,
            NumericField::BreachLikelihoodScore => Field::BreachLikelihoodScore,
        }
    }
}

/// A single cell of a projected row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Flag(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            // Matches the True/False spelling of the persisted table
            FieldValue::Flag(true) => f.write_str("True"),
            FieldValue::Flag(false) => f.write_str("False"),
        }
    }
}

/// Reduced view of one vendor, cells in the requested column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    cells: Vec<(Field, FieldValue)>,
}

impl ProjectedRow {
    pub fn from_vendor(vendor: &ScoredVendor, fields: &[Field]) -> Self {
        Self {
            cells: fields.iter().map(|f| (*f, f.value(vendor))).collect(),
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.cells
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value)
    }

    pub fn cells(&self) -> &[(Field, FieldValue)] {
        &self.cells
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.cells.iter().map(|(_, value)| value)
    }
}

impl Serialize for ProjectedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (field, value) in &self.cells {
            map.serialize_entry(field.header(), value)?;
        }
        map.end()
    }
}
