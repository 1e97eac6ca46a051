use crate::risk_assessment::domain::{FilterSelection, ScoredVendor};

/// Inclusion test compiled from a [`FilterSelection`].
///
/// A vendor matches when its risk level, service type and country are all
/// selected. Within an axis any selected value matches; an axis with no
/// selected values matches nothing.
#[derive(Debug, Clone)]
pub struct FilterPredicate {
    selection: FilterSelection,
}

impl FilterPredicate {
    pub fn matches(&self, vendor: &ScoredVendor) -> bool {
        self.selection.risk_levels.contains(&vendor.risk_level())
            && self.selection.service_types.contains(&vendor.service_type())
            && self.selection.countries.contains(vendor.country())
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }
}

pub struct FilterPredicateBuilder;

impl FilterPredicateBuilder {
    pub fn build(selection: &FilterSelection) -> FilterPredicate {
        FilterPredicate {
            selection: selection.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk_assessment::domain::{
        Iso27001Compliance, NistCsfAdoption, OwaspFinding, OwaspRiskCategory, OwaspStatus,
        RiskLevel, RiskRating, ServiceType, VendorId, VendorProfile,
    };
    use crate::risk_assessment::services::ScoringEngine;

    fn vendor(service_type: ServiceType, country: &str, impact: i64) -> ScoredVendor {
        let profile = VendorProfile {
            vendor_id: VendorId::new(1),
            vendor_name: "Vendor_001".to_string(),
            service_type,
            country: country.to_string(),
            risk_impact: RiskRating::new(impact).unwrap(),
            risk_likelihood: RiskRating::new(5).unwrap(),
            open_vulnerabilities: 0,
            incident_history: 0,
            iso27001_compliance: Iso27001Compliance::Compliant,
            nist_csf_adoption: NistCsfAdoption::High,
        };
        let check = ScoringEngine::owasp_llm_check(&profile, || {
            OwaspFinding::new(OwaspRiskCategory::ModelTheft, OwaspStatus::Mitigated)
        });
        ScoringEngine::score(profile, check).unwrap()
    }

    fn everything() -> FilterSelection {
        FilterSelection::new(
            RiskLevel::ALL,
            ServiceType::ALL,
            ["UK".to_string(), "Ghana".to_string()],
        )
    }

    #[test]
    fn test_full_selection_matches() {
        let predicate = FilterPredicateBuilder::build(&everything());
        assert!(predicate.matches(&vendor(ServiceType::Consulting, "UK", 1)));
        assert!(predicate.matches(&vendor(ServiceType::ManagedIt, "Ghana", 5)));
    }

    #[test]
    fn test_axes_are_combined_with_and() {
        let selection = everything()
            .with_risk_levels([RiskLevel::High])
            .with_countries(["UK".to_string()]);
        let predicate = FilterPredicateBuilder::build(&selection);

        // 5 x 5 = 25 -> High
        assert!(predicate.matches(&vendor(ServiceType::Consulting, "UK", 5)));
        // High but wrong country
        assert!(!predicate.matches(&vendor(ServiceType::Consulting, "Ghana", 5)));
        // Right country but 1 x 5 = 5 -> Low
        assert!(!predicate.matches(&vendor(ServiceType::Consulting, "UK", 1)));
    }

    #[test]
    fn test_values_within_an_axis_are_alternatives() {
        let selection =
            everything().with_service_types([ServiceType::Consulting, ServiceType::ManagedIt]);
        let predicate = FilterPredicateBuilder::build(&selection);

        assert!(predicate.matches(&vendor(ServiceType::Consulting, "UK", 1)));
        assert!(predicate.matches(&vendor(ServiceType::ManagedIt, "UK", 1)));
        assert!(!predicate.matches(&vendor(ServiceType::CloudServices, "UK", 1)));
    }

    #[test]
    fn test_empty_axis_excludes_everything() {
        let candidates = [
            vendor(ServiceType::Consulting, "UK", 1),
            vendor(ServiceType::AiModelProvider, "UK", 3),
            vendor(ServiceType::SaasPlatform, "Ghana", 5),
        ];

        for empty in [
            everything().with_risk_levels(Vec::<RiskLevel>::new()),
            everything().with_service_types(Vec::<ServiceType>::new()),
            everything().with_countries(Vec::new()),
        ] {
            let predicate = FilterPredicateBuilder::build(&empty);
            assert!(candidates.iter().all(|v| !predicate.matches(v)));
        }
    }

    #[test]
    fn test_country_match_is_exact() {
        let predicate = FilterPredicateBuilder::build(&everything());
        assert!(!predicate.matches(&vendor(ServiceType::Consulting, "uk", 1)));
    }
}
