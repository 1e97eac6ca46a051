//! Builds the RiskReport read model from a loaded and a filtered dataset

use super::risk_report::{AiVendorAssessment, KeyIndicators, ReportMetadata, RiskReport};
use crate::risk_assessment::domain::owasp::CHECK_SEPARATOR;
use crate::risk_assessment::domain::{Dataset, Field, FilterSelection, NumericField};
use crate::risk_assessment::services::{Aggregator, DatasetFingerprint};
use chrono::Utc;
use uuid::Uuid;

/// Columns shown for each vendor in the AI assessment
pub const AI_VENDOR_COLUMNS: [Field; 5] = [
    Field::VendorName,
    Field::ServiceType,
    Field::OverallRiskScore,
    Field::BreachLikelihoodScore,
    Field::OwaspLlmCheck,
];

pub struct RiskReportBuilder;

impl RiskReportBuilder {
    /// Aggregates `filtered` into a report.
    ///
    /// `loaded` is the unfiltered roster; only its size is reported.
    pub fn build(
        loaded: &Dataset,
        filtered: &Dataset,
        selection: &FilterSelection,
        high_risk_threshold: u8,
        source: &str,
        fingerprint: &DatasetFingerprint,
    ) -> RiskReport {
        let aggregator = Aggregator::new(filtered);

        RiskReport {
            metadata: Self::build_metadata(source, fingerprint),
            filters: selection.clone(),
            key_indicators: Self::build_key_indicators(
                loaded.len(),
                filtered,
                &aggregator,
                high_risk_threshold,
            ),
            risk_matrix: aggregator.risk_matrix(),
            risk_level_distribution: aggregator.value_counts(Field::RiskLevel),
            iso27001_distribution: aggregator.value_counts(Field::Iso27001Compliance),
            nist_csf_distribution: aggregator.value_counts(Field::NistCsfAdoption),
            ai_assessment: Self::build_ai_assessment(filtered),
            vendors: filtered.project(&Field::EXPORT_COLUMNS),
        }
    }

    fn build_metadata(source: &str, fingerprint: &DatasetFingerprint) -> ReportMetadata {
        ReportMetadata {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            report_id: format!("urn:uuid:{}", Uuid::new_v4()),
            source: source.to_string(),
            dataset_fingerprint: fingerprint.to_string(),
        }
    }

    fn build_key_indicators(
        loaded_vendors: usize,
        filtered: &Dataset,
        aggregator: &Aggregator<'_>,
        high_risk_threshold: u8,
    ) -> KeyIndicators {
        KeyIndicators {
            loaded_vendors,
            total_vendors: aggregator.count(),
            high_risk_threshold,
            high_risk_vendors: aggregator.count_above_threshold(
                NumericField::OverallRiskScore,
                f64::from(high_risk_threshold),
            ),
            ai_vendors: filtered.iter().filter(|vendor| vendor.is_ai_vendor()).count(),
            mean_breach_likelihood: aggregator.mean(NumericField::BreachLikelihoodScore),
        }
    }

    fn build_ai_assessment(filtered: &Dataset) -> Option<AiVendorAssessment> {
        let ai_vendors = filtered.filter(|vendor| vendor.is_ai_vendor());
        if ai_vendors.is_empty() {
            return None;
        }

        let aggregator = Aggregator::new(&ai_vendors);
        Some(AiVendorAssessment {
            total_ai_vendors: aggregator.count(),
            vulnerable_ai_vendors: ai_vendors
                .iter()
                .filter(|vendor| vendor.owasp_llm_check().is_vulnerable())
                .count(),
            owasp_breakdown: aggregator.group_prefix_counts(Field::OwaspLlmCheck, CHECK_SEPARATOR),
            vendors: ai_vendors.project(&AI_VENDOR_COLUMNS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk_assessment::domain::{
        FieldValue, OwaspFinding, OwaspRiskCategory, OwaspStatus, RawInteger, RawVendorRecord,
        ServiceType,
    };

    fn row(name: &str, service: &str, impact: i64, check: Option<&str>) -> RawVendorRecord {
        RawVendorRecord {
            vendor_name: name.to_string(),
            service_type: service.to_string(),
            country: "Germany".to_string(),
            risk_impact: impact.into(),
            risk_likelihood: RawInteger::Int(4),
            open_vulnerabilities: RawInteger::Int(20),
            incident_history: RawInteger::Int(1),
            iso27001_compliance: "Non-Compliant".to_string(),
            nist_csf_adoption: "Medium".to_string(),
            owasp_llm_check: check.map(str::to_string),
            ..RawVendorRecord::default()
        }
    }

    fn roster() -> Vec<RawVendorRecord> {
        vec![
            row("Vendor_001", "Managed IT", 5, None),
            row("Vendor_002", "AI Model Provider", 4, Some("Data Leakage: Vulnerable")),
            row("Vendor_003", "AI Model Provider", 2, Some("Data Leakage: Mitigated")),
            row("Vendor_004", "SaaS Platform", 1, None),
        ]
    }

    fn build(selection: impl FnOnce(&Dataset) -> FilterSelection) -> RiskReport {
        let raw = roster();
        let loaded = Dataset::load(&raw, || {
            OwaspFinding::new(OwaspRiskCategory::ModelTheft, OwaspStatus::Vulnerable)
        })
        .unwrap();
        let selection = selection(&loaded);
        let filtered = loaded.filter_by(&selection);
        RiskReportBuilder::build(
            &loaded,
            &filtered,
            &selection,
            15,
            "test roster",
            &DatasetFingerprint::of(&raw),
        )
    }

    #[test]
    fn test_key_indicators_over_full_selection() {
        let report = build(FilterSelection::full_domain);
        let indicators = &report.key_indicators;

        assert_eq!(indicators.loaded_vendors, 4);
        assert_eq!(indicators.total_vendors, 4);
        // Scores 20, 16, 8, 4
        assert_eq!(indicators.high_risk_vendors, 2);
        assert_eq!(indicators.ai_vendors, 2);
        // 10 + 20 + 15 = 45 for every vendor
        assert_eq!(indicators.mean_breach_likelihood, 45.0);
    }

    #[test]
    fn test_ai_vendor_count_follows_selection() {
        let report = build(|data| {
            FilterSelection::full_domain(data)
                .with_service_types([ServiceType::AiModelProvider, ServiceType::SaasPlatform])
        });

        assert_eq!(report.key_indicators.total_vendors, 3);
        assert_eq!(report.key_indicators.ai_vendors, 2);
    }

    #[test]
    fn test_ai_assessment() {
        let report = build(FilterSelection::full_domain);
        let ai = report.ai_assessment.unwrap();

        assert_eq!(ai.total_ai_vendors, 2);
        assert_eq!(ai.vulnerable_ai_vendors, 1);
        assert_eq!(ai.owasp_breakdown.get("Data Leakage"), 2);
        assert_eq!(ai.vendors.len(), 2);
        assert_eq!(
            ai.vendors[0].get(Field::OwaspLlmCheck),
            Some(&FieldValue::Text("Data Leakage: Vulnerable".to_string()))
        );
    }

    #[test]
    fn test_ai_assessment_absent_without_ai_vendors() {
        let report = build(|data| {
            FilterSelection::full_domain(data).with_service_types([ServiceType::ManagedIt])
        });
        assert!(report.ai_assessment.is_none());
        assert_eq!(report.key_indicators.total_vendors, 1);
        assert_eq!(report.key_indicators.loaded_vendors, 4);
    }

    #[test]
    fn test_empty_selection_degrades_gracefully() {
        let report = build(|data| FilterSelection::full_domain(data).with_countries(Vec::new()));

        assert_eq!(report.key_indicators.total_vendors, 0);
        assert_eq!(report.key_indicators.high_risk_vendors, 0);
        assert_eq!(report.key_indicators.mean_breach_likelihood, 0.0);
        assert!(report.vendors.is_empty());
        assert!(report.iso27001_distribution.is_empty());
        assert_eq!(report.risk_matrix.len(), 25);
    }

    #[test]
    fn test_vendor_rows_use_export_columns() {
        let report = build(FilterSelection::full_domain);
        let headers: Vec<&str> = report.vendors[0]
            .cells()
            .iter()
            .map(|(field, _)| field.header())
            .collect();
        let expected: Vec<&str> = Field::EXPORT_COLUMNS.iter().map(|f| f.header()).collect();
        assert_eq!(headers, expected);
    }

    #[test]
    fn test_metadata() {
        let report = build(FilterSelection::full_domain);
        assert_eq!(report.metadata.tool_name, "vendor-risk");
        assert_eq!(report.metadata.source, "test roster");
        assert!(report.metadata.report_id.starts_with("urn:uuid:"));
        assert_eq!(report.metadata.dataset_fingerprint.len(), 64);
    }

    #[test]
    fn test_distributions_total_matches_selection() {
        let report = build(FilterSelection::full_domain);
        assert_eq!(report.risk_level_distribution.total(), 4);
        assert_eq!(report.nist_csf_distribution.get("Medium"), 4);
        assert_eq!(report.iso27001_distribution.get("Non-Compliant"), 4);
    }
}
