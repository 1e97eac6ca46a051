use crate::risk_assessment::domain::{
    OwaspLlmCheck, RawInteger, RawVendorRecord, RiskRating, ServiceType, VendorId, VendorProfile,
};
use crate::risk_assessment::domain::vendor::{MAX_RATING, MIN_RATING};
use crate::shared::error::{DuplicateEntry, FieldViolation, RecordRef, RiskError};
use std::collections::HashMap;

/// A roster row that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedVendor {
    pub profile: VendorProfile,
    /// Check carried over from the source, if the row had one
    pub owasp_llm_check: Option<OwaspLlmCheck>,
}

/// RosterValidator checks raw rows against the declared field domains.
///
/// Validation is all-or-nothing: every violation in the batch is collected
/// and reported together, and no row is returned unless all rows pass.
pub struct RosterValidator;

impl RosterValidator {
    /// Validates `records` and enforces VendorID / VendorName uniqueness.
    ///
    /// Rows without a `VendorID` get their 1-based row position.
    ///
    /// # Errors
    /// - `Validation` listing every out-of-domain field
    /// - `DuplicateKey` when IDs or names repeat (checked after field validation)
    pub fn validate(records: &[RawVendorRecord]) -> Result<Vec<ValidatedVendor>, RiskError> {
        let mut violations = Vec::new();
        let mut validated = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;
            let mut checker = RowChecker::new(row, record);
            if let Some(vendor) = checker.check() {
                validated.push(vendor);
            }
            violations.extend(checker.violations);
        }

        if !violations.is_empty() {
            return Err(RiskError::Validation { violations });
        }

        Self::check_uniqueness(&validated)?;
        Ok(validated)
    }

    fn check_uniqueness(vendors: &[ValidatedVendor]) -> Result<(), RiskError> {
        let mut duplicates = Self::find_duplicates(vendors, "VendorID", |v| {
            v.profile.vendor_id.to_string()
        });
        duplicates.extend(Self::find_duplicates(vendors, "VendorName", |v| {
            v.profile.vendor_name.clone()
        }));

        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(RiskError::DuplicateKey { duplicates })
        }
    }

    /// Groups rows by key, keeping first-seen key order.
    fn find_duplicates<K>(
        vendors: &[ValidatedVendor],
        column: &'static str,
        key: K,
    ) -> Vec<DuplicateEntry>
    where
        K: Fn(&ValidatedVendor) -> String,
    {
        let mut order: Vec<String> = Vec::new();
        let mut rows_by_key: HashMap<String, Vec<usize>> = HashMap::new();

        // Validation succeeded for every row, so index + 1 is the source row.
        for (idx, vendor) in vendors.iter().enumerate() {
            let value = key(vendor);
            let rows = rows_by_key.entry(value.clone()).or_insert_with(|| {
                order.push(value);
                Vec::new()
            });
            rows.push(idx + 1);
        }

        order
            .into_iter()
            .filter_map(|value| {
                let rows = rows_by_key.remove(&value)?;
                (rows.len() > 1).then_some(DuplicateEntry {
                    column,
                    value,
                    rows,
                })
            })
            .collect()
    }
}

/// Validates one row, accumulating violations instead of stopping at the first.
struct RowChecker<'a> {
    row: usize,
    record: &'a RawVendorRecord,
    violations: Vec<FieldViolation>,
}

impl<'a> RowChecker<'a> {
    fn new(row: usize, record: &'a RawVendorRecord) -> Self {
        Self {
            row,
            record,
            violations: Vec::new(),
        }
    }

    fn reject(&mut self, field: &'static str, reason: impl Into<String>) {
        self.violations.push(FieldViolation {
            record: RecordRef {
                row: self.row,
                vendor_id: self.record.vendor_id.as_ref().and_then(RawInteger::as_int),
                vendor_name: self.record.vendor_name.clone(),
            },
            field,
            reason: reason.into(),
        });
    }

    fn parse_label<T>(&mut self, field: &'static str, value: &str) -> Option<T>
    where
        T: std::str::FromStr<Err = String>,
    {
        value.parse().map_err(|e: String| self.reject(field, e)).ok()
    }

    fn integer(&mut self, field: &'static str, value: &RawInteger) -> Option<i64> {
        match value {
            RawInteger::Int(value) => Some(*value),
            RawInteger::Text(text) if text.trim().is_empty() => {
                self.reject(field, "is missing a value");
                None
            }
            RawInteger::Text(_) => {
                self.reject(field, format!("must be an integer (got {})", value));
                None
            }
        }
    }

    fn rating(&mut self, field: &'static str, value: &RawInteger) -> Option<RiskRating> {
        let value = self.integer(field, value)?;
        let rating = RiskRating::new(value);
        if rating.is_none() {
            self.reject(
                field,
                format!(
                    "must be between {} and {} (got {})",
                    MIN_RATING, MAX_RATING, value
                ),
            );
        }
        rating
    }

    fn count(&mut self, field: &'static str, value: &RawInteger) -> Option<u32> {
        let value = self.integer(field, value)?;
        if value < 0 {
            self.reject(
                field,
                format!("must be a non-negative count (got {})", value),
            );
            return None;
        }
        let count = u32::try_from(value).ok();
        if count.is_none() {
            self.reject(
                field,
                format!("exceeds the supported maximum of {} (got {})", u32::MAX, value),
            );
        }
        count
    }

    fn required_text(&mut self, field: &'static str, value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.reject(field, "must not be empty");
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn vendor_id(&mut self) -> Option<VendorId> {
        let record = self.record;
        match &record.vendor_id {
            None => match u32::try_from(self.row) {
                Ok(id) => Some(VendorId::new(id)),
                Err(_) => {
                    self.reject("VendorID", "row position does not fit a vendor id");
                    None
                }
            },
            Some(id) => match u32::try_from(self.integer("VendorID", id)?) {
                Ok(id) if id > 0 => Some(VendorId::new(id)),
                _ => {
                    self.reject("VendorID", format!("must be a positive integer (got {})", id));
                    None
                }
            },
        }
    }

    fn owasp_check(&mut self, service_type: Option<ServiceType>) -> Option<OwaspLlmCheck> {
        let raw = self.record.owasp_llm_check.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        let check: OwaspLlmCheck = self.parse_label("OWASP_LLM_Check", raw)?;
        let is_ai = service_type? == ServiceType::AiModelProvider;
        match (is_ai, check) {
            (true, OwaspLlmCheck::NotApplicable) => {
                self.reject(
                    "OWASP_LLM_Check",
                    "must hold a '<Category>: <Status>' finding for an AI Model Provider",
                );
                None
            }
            (false, OwaspLlmCheck::Assessed(_)) => {
                self.reject(
                    "OWASP_LLM_Check",
                    format!("must be 'N/A' for a non-AI vendor (got '{}')", raw),
                );
                None
            }
            _ => Some(check),
        }
    }

    fn check(&mut self) -> Option<ValidatedVendor> {
        let record = self.record;
        let vendor_id = self.vendor_id();
        let vendor_name = self.required_text("VendorName", &record.vendor_name);
        let service_type: Option<ServiceType> =
            self.parse_label("ServiceType", &record.service_type);
        let country = self.required_text("Country", &record.country);
        let risk_impact = self.rating("RiskImpact", &record.risk_impact);
        let risk_likelihood = self.rating("RiskLikelihood", &record.risk_likelihood);
        let open_vulnerabilities = self.count("OpenVulnerabilities", &record.open_vulnerabilities);
        let incident_history = self.count("IncidentHistory", &record.incident_history);
        let iso27001_compliance =
            self.parse_label("ISO27001_Compliance", &record.iso27001_compliance);
        let nist_csf_adoption = self.parse_label("NIST_CSF_Adoption", &record.nist_csf_adoption);
        let owasp_llm_check = self.owasp_check(service_type);

        Some(ValidatedVendor {
            profile: VendorProfile {
                vendor_id: vendor_id?,
                vendor_name: vendor_name?,
                service_type: service_type?,
                country: country?,
                risk_impact: risk_impact?,
                risk_likelihood: risk_likelihood?,
                open_vulnerabilities: open_vulnerabilities?,
                incident_history: incident_history?,
                iso27001_compliance: iso27001_compliance?,
                nist_csf_adoption: nist_csf_adoption?,
            },
            owasp_llm_check,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, service_type: &str) -> RawVendorRecord {
        RawVendorRecord {
            vendor_id: None,
            vendor_name: name.to_string(),
            service_type: service_type.to_string(),
            country: "Germany".to_string(),
            risk_impact: RawInteger::Int(3),
            risk_likelihood: RawInteger::Int(2),
            open_vulnerabilities: RawInteger::Int(4),
            incident_history: RawInteger::Int(0),
            iso27001_compliance: "Compliant".to_string(),
            nist_csf_adoption: "High".to_string(),
            owasp_llm_check: None,
        }
    }

    fn violations(result: Result<Vec<ValidatedVendor>, RiskError>) -> Vec<FieldViolation> {
        match result {
            Err(RiskError::Validation { violations }) => violations,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_rows_pass() {
        let rows = vec![raw("Acme", "Consulting"), raw("Globex", "Managed IT")];
        let validated = RosterValidator::validate(&rows).unwrap();

        assert_eq!(validated.len(), 2);
        assert_eq!(validated[1].profile.service_type, ServiceType::ManagedIt);
        assert_eq!(validated[1].profile.risk_impact.value(), 3);
    }

    #[test]
    fn test_missing_ids_use_row_position() {
        let rows = vec![raw("Acme", "Consulting"), raw("Globex", "Consulting")];
        let validated = RosterValidator::validate(&rows).unwrap();

        assert_eq!(validated[0].profile.vendor_id, VendorId::new(1));
        assert_eq!(validated[1].profile.vendor_id, VendorId::new(2));
    }

    #[test]
    fn test_supplied_ids_are_kept() {
        let mut row = raw("Acme", "Consulting");
        row.vendor_id = Some(RawInteger::Int(77));
        let validated = RosterValidator::validate(&[row]).unwrap();
        assert_eq!(validated[0].profile.vendor_id, VendorId::new(77));
    }

    #[test]
    fn test_every_violation_is_reported() {
        let mut bad = raw("Acme", "Blockchain");
        bad.vendor_id = Some(RawInteger::Int(5));
        bad.risk_impact = RawInteger::Int(6);
        bad.open_vulnerabilities = RawInteger::Int(-1);
        bad.iso27001_compliance = "Certified".to_string();

        let found = violations(RosterValidator::validate(&[raw("Ok", "Consulting"), bad]));
        let fields: Vec<&str> = found.iter().map(|v| v.field).collect();

        assert_eq!(
            fields,
            vec![
                "ServiceType",
                "RiskImpact",
                "OpenVulnerabilities",
                "ISO27001_Compliance"
            ]
        );
        assert!(found.iter().all(|v| v.record.row == 2));
        assert!(found.iter().all(|v| v.record.vendor_id == Some(5)));
    }

    #[test]
    fn test_zero_likelihood_is_rejected() {
        let mut row = raw("Acme", "Consulting");
        row.risk_likelihood = RawInteger::Int(0);
        let found = violations(RosterValidator::validate(&[row]));
        assert_eq!(found[0].field, "RiskLikelihood");
        assert!(found[0].reason.contains("between 1 and 5"));
    }

    #[test]
    fn test_blank_name_and_country_are_rejected() {
        let mut row = raw("  ", "Consulting");
        row.country = String::new();
        let found = violations(RosterValidator::validate(&[row]));
        let fields: Vec<&str> = found.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["VendorName", "Country"]);
    }

    #[test]
    fn test_non_positive_vendor_id_is_rejected() {
        let mut row = raw("Acme", "Consulting");
        row.vendor_id = Some(RawInteger::Int(0));
        let found = violations(RosterValidator::validate(&[row]));
        assert_eq!(found[0].field, "VendorID");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut first = raw("Acme", "Consulting");
        first.vendor_id = Some(RawInteger::Int(3));
        let mut second = raw("Globex", "Consulting");
        second.vendor_id = Some(RawInteger::Int(3));

        match RosterValidator::validate(&[first, second]) {
            Err(RiskError::DuplicateKey { duplicates }) => {
                assert_eq!(duplicates.len(), 1);
                assert_eq!(duplicates[0].column, "VendorID");
                assert_eq!(duplicates[0].value, "3");
                assert_eq!(duplicates[0].rows, vec![1, 2]);
            }
            other => panic!("expected duplicate key error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let rows = vec![
            raw("Acme", "Consulting"),
            raw("Globex", "Consulting"),
            raw("Acme", "Managed IT"),
        ];
        match RosterValidator::validate(&rows) {
            Err(RiskError::DuplicateKey { duplicates }) => {
                assert_eq!(duplicates[0].column, "VendorName");
                assert_eq!(duplicates[0].rows, vec![1, 3]);
            }
            other => panic!("expected duplicate key error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_errors_take_precedence_over_duplicates() {
        let mut bad = raw("Acme", "Consulting");
        bad.risk_impact = RawInteger::Int(9);
        let rows = vec![raw("Acme", "Consulting"), bad];
        assert!(matches!(
            RosterValidator::validate(&rows),
            Err(RiskError::Validation { .. })
        ));
    }

    #[test]
    fn test_preassigned_owasp_check_is_kept() {
        let mut row = raw("Acme AI", "AI Model Provider");
        row.owasp_llm_check = Some("Prompt Injection: Mitigated".to_string());
        let validated = RosterValidator::validate(&[row]).unwrap();
        assert_eq!(
            validated[0].owasp_llm_check.unwrap().to_string(),
            "Prompt Injection: Mitigated"
        );
    }

    #[test]
    fn test_blank_owasp_check_counts_as_absent() {
        let mut row = raw("Acme AI", "AI Model Provider");
        row.owasp_llm_check = Some("   ".to_string());
        let validated = RosterValidator::validate(&[row]).unwrap();
        assert!(validated[0].owasp_llm_check.is_none());
    }

    #[test]
    fn test_owasp_finding_on_non_ai_vendor_is_rejected() {
        let mut row = raw("Acme", "Consulting");
        row.owasp_llm_check = Some("Model Theft: Vulnerable".to_string());
        let found = violations(RosterValidator::validate(&[row]));
        assert_eq!(found[0].field, "OWASP_LLM_Check");
        assert!(found[0].reason.contains("must be 'N/A'"));
    }

    #[test]
    fn test_not_applicable_on_ai_vendor_is_rejected() {
        let mut row = raw("Acme AI", "AI Model Provider");
        row.owasp_llm_check = Some("N/A".to_string());
        let found = violations(RosterValidator::validate(&[row]));
        assert_eq!(found[0].field, "OWASP_LLM_Check");
    }

    #[test]
    fn test_malformed_owasp_check_is_rejected() {
        let mut row = raw("Acme AI", "AI Model Provider");
        row.owasp_llm_check = Some("Prompt Injection - Vulnerable".to_string());
        let found = violations(RosterValidator::validate(&[row]));
        assert_eq!(found[0].field, "OWASP_LLM_Check");
    }

    #[test]
    fn test_empty_roster_is_valid() {
        assert!(RosterValidator::validate(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_non_integer_cells_are_violations() {
        let mut first = raw("Acme", "Consulting");
        first.risk_impact = RawInteger::Text("high".to_string());
        first.incident_history = RawInteger::Text(String::new());
        let mut second = raw("Globex", "Consulting");
        second.risk_likelihood = RawInteger::Text("3.0".to_string());
        second.vendor_id = Some(RawInteger::Text("G-1".to_string()));

        let found = violations(RosterValidator::validate(&[first, second]));
        let fields: Vec<(usize, &str)> = found.iter().map(|v| (v.record.row, v.field)).collect();

        assert_eq!(
            fields,
            vec![
                (1, "RiskImpact"),
                (1, "IncidentHistory"),
                (2, "VendorID"),
                (2, "RiskLikelihood")
            ]
        );
        assert_eq!(found[0].reason, "must be an integer (got 'high')");
        assert_eq!(found[1].reason, "is missing a value");
        assert_eq!(found[3].reason, "must be an integer (got '3.0')");
    }

    #[test]
    fn test_oversized_count_reports_maximum() {
        let mut row = raw("Acme", "Consulting");
        row.open_vulnerabilities = RawInteger::Int(5_000_000_000);
        let found = violations(RosterValidator::validate(&[row]));

        assert_eq!(found[0].field, "OpenVulnerabilities");
        assert_eq!(
            found[0].reason,
            "exceeds the supported maximum of 4294967295 (got 5000000000)"
        );
    }
}
