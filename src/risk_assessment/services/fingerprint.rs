use crate::risk_assessment::domain::{RawInteger, RawVendorRecord};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 content hash of a raw roster.
///
/// Two rosters share a fingerprint only if every row holds the same raw
/// values in the same order, so a scored dataset cached under a fingerprint
/// is never served for changed source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetFingerprint([u8; 32]);

impl DatasetFingerprint {
    pub fn of(records: &[RawVendorRecord]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((records.len() as u64).to_le_bytes());

        for record in records {
            match &record.vendor_id {
                Some(id) => {
                    hasher.update([1u8]);
                    update_integer(&mut hasher, id);
                }
                None => hasher.update([0u8]),
            }
            update_str(&mut hasher, &record.vendor_name);
            update_str(&mut hasher, &record.service_type);
            update_str(&mut hasher, &record.country);
            for number in [
                &record.risk_impact,
                &record.risk_likelihood,
                &record.open_vulnerabilities,
                &record.incident_history,
            ] {
                update_integer(&mut hasher, number);
            }
            update_str(&mut hasher, &record.iso27001_compliance);
            update_str(&mut hasher, &record.nist_csf_adoption);
            match &record.owasp_llm_check {
                Some(check) => {
                    hasher.update([1u8]);
                    update_str(&mut hasher, check);
                }
                None => hasher.update([0u8]),
            }
        }

        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// First 12 hex digits, for log lines
    pub fn short(&self) -> String {
        self.to_string()[..12].to_string()
    }
}

// Length prefix keeps ("ab", "c") and ("a", "bc") apart.
fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn update_integer(hasher: &mut Sha256, value: &RawInteger) {
    match value {
        RawInteger::Int(value) => {
            hasher.update([0u8]);
            hasher.update(value.to_le_bytes());
        }
        RawInteger::Text(text) => {
            hasher.update([1u8]);
            update_str(hasher, text);
        }
    }
}

impl fmt::Display for DatasetFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
