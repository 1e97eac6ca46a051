use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One roster row exactly as a data source delivers it.
///
/// Categorical columns stay as text and numeric columns stay as
/// [`RawInteger`] so that out-of-domain input reaches validation, where it is
/// reported per field, instead of failing deserialization. `VendorID` may be
/// absent, in which case the 1-based row position is used. `OWASP_LLM_Check`
/// carries a previously assigned check when reloading an exported table.
///
/// Derived columns of the export table (`OverallRiskScore`, `Is_AI_Vendor`,
/// `BreachLikelihoodScore`) are not part of this record: they are always
/// recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVendorRecord {
    #[serde(rename = "VendorID", default)]
    pub vendor_id: Option<RawInteger>,
    #[serde(rename = "VendorName")]
    pub vendor_name: String,
    #[serde(rename = "ServiceType")]
    pub service_type: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "RiskImpact")]
    pub risk_impact: RawInteger,
    #[serde(rename = "RiskLikelihood")]
    pub risk_likelihood: RawInteger,
    #[serde(rename = "OpenVulnerabilities")]
    pub open_vulnerabilities: RawInteger,
    #[serde(rename = "IncidentHistory")]
    pub incident_history: RawInteger,
    #[serde(rename = "ISO27001_Compliance")]
    pub iso27001_compliance: String,
    #[serde(rename = "NIST_CSF_Adoption")]
    pub nist_csf_adoption: String,
    #[serde(rename = "OWASP_LLM_Check", default)]
    pub owasp_llm_check: Option<String>,
}

/// A numeric cell that may not hold an integer.
///
/// Anything that is not a whole number (`high`, `3.0`, a blank cell) is kept
/// as `Text` so validation can name the column it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInteger {
    Int(i64),
    Text(String),
}

impl RawInteger {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawInteger::Int(value) => Some(*value),
            RawInteger::Text(_) => None,
        }
    }
}

impl Default for RawInteger {
    fn default() -> Self {
        RawInteger::Int(0)
    }
}

impl From<i64> for RawInteger {
    fn from(value: i64) -> Self {
        RawInteger::Int(value)
    }
}

impl PartialEq<i64> for RawInteger {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl fmt::Display for RawInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInteger::Int(value) => write!(f, "{}", value),
            RawInteger::Text(text) => write!(f, "'{}'", text),
        }
    }
}

impl Serialize for RawInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawInteger::Int(value) => serializer.serialize_i64(*value),
            RawInteger::Text(text) => serializer.serialize_str(text),
        }
    }
}

struct RawIntegerVisitor;

impl<'de> Visitor<'de> for RawIntegerVisitor {
    type Value = RawInteger;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or any cell text")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawInteger, E> {
        Ok(RawInteger::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawInteger, E> {
        Ok(RawInteger::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawInteger, E> {
        Ok(i64::try_from(v)
            .map(RawInteger::Int)
            .unwrap_or_else(|_| RawInteger::Text(v.to_string())))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<RawInteger, E> {
        Ok(RawInteger::Text(v.to_string()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<RawInteger, E> {
        Ok(RawInteger::Text(v.to_string()))
    }

    // Debug keeps the fraction visible: 3.0 stays "3.0"
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawInteger, E> {
        Ok(RawInteger::Text(format!("{:?}", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawInteger, E> {
        Ok(v.trim()
            .parse::<i64>()
            .map(RawInteger::Int)
            .unwrap_or_else(|_| RawInteger::Text(v.to_string())))
    }
}

impl<'de> Deserialize<'de> for RawInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawIntegerVisitor)
    }
}
