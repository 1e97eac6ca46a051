use super::categories::{RiskLevel, ServiceType};
use super::dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Category values a reader has selected on each filter axis.
///
/// An empty set on an axis selects nothing on that axis. The "everything
/// selected" default is [`FilterSelection::full_domain`], computed from the
/// values actually present in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub risk_levels: BTreeSet<RiskLevel>,
    pub service_types: BTreeSet<ServiceType>,
    pub countries: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new(
        risk_levels: impl IntoIterator<Item = RiskLevel>,
        service_types: impl IntoIterator<Item = ServiceType>,
        countries: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            risk_levels: risk_levels.into_iter().collect(),
            service_types: service_types.into_iter().collect(),
            countries: countries.into_iter().collect(),
        }
    }

    /// Selection containing every value observed in `dataset`
    pub fn full_domain(dataset: &Dataset) -> Self {
        Self::new(
            dataset.iter().map(|v| v.risk_level()),
            dataset.iter().map(|v| v.service_type()),
            dataset.iter().map(|v| v.country().to_string()),
        )
    }

    pub fn with_risk_levels(mut self, risk_levels: impl IntoIterator<Item = RiskLevel>) -> Self {
        self.risk_levels = risk_levels.into_iter().collect();
        self
    }

    pub fn with_service_types(
        mut self,
        service_types: impl IntoIterator<Item = ServiceType>,
    ) -> Self {
        self.service_types = service_types.into_iter().collect();
        self
    }

    pub fn with_countries(mut self, countries: impl IntoIterator<Item = String>) -> Self {
        self.countries = countries.into_iter().collect();
        self
    }

    /// True when any axis has nothing selected
    pub fn excludes_everything(&self) -> bool {
        self.risk_levels.is_empty() || self.service_types.is_empty() || self.countries.is_empty()
    }
}
