use crate::risk_assessment::domain::{Dataset, FilterSelection, RiskLevel, ServiceType};
use serde::Deserialize;

/// Filter values as supplied by the user, before the dataset is known.
///
/// `None` on an axis means "not specified" and resolves to every value the
/// dataset holds on that axis. `Some(vec![])` is an explicit empty
/// selection and excludes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterCriteria {
    pub risk_levels: Option<Vec<RiskLevel>>,
    pub service_types: Option<Vec<ServiceType>>,
    pub countries: Option<Vec<String>>,
}

impl FilterCriteria {
    pub fn resolve(&self, dataset: &Dataset) -> FilterSelection {
        let mut selection = FilterSelection::full_domain(dataset);
        if let Some(risk_levels) = &self.risk_levels {
            selection = selection.with_risk_levels(risk_levels.iter().copied());
        }
        if let Some(service_types) = &self.service_types {
            selection = selection.with_service_types(service_types.iter().copied());
        }
        if let Some(countries) = &self.countries {
            selection = selection.with_countries(countries.iter().map(|c| c.trim().to_string()));
        }
        selection
    }

    /// Fills every unspecified axis from `fallback`.
    pub fn or(self, fallback: FilterCriteria) -> Self {
        Self {
            risk_levels: self.risk_levels.or(fallback.risk_levels),
            service_types: self.service_types.or(fallback.service_types),
            countries: self.countries.or(fallback.countries),
        }
    }
}
