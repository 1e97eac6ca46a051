use super::field::{Field, ProjectedRow};
use super::filter_selection::FilterSelection;
use super::owasp::OwaspFinding;
use super::raw_vendor_record::RawVendorRecord;
use super::vendor::ScoredVendor;
use crate::risk_assessment::services::{FilterPredicateBuilder, RosterValidator, ScoringEngine};
use crate::shared::error::RiskError;

/// Ordered, scored vendor roster.
///
/// A dataset is never mutated after construction. Filtering returns a new
/// dataset that keeps the relative order of the source rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    vendors: Vec<ScoredVendor>,
}

impl Dataset {
    /// Validates and scores `raw` in one batch.
    ///
    /// `assign` supplies the OWASP finding for AI vendors whose row does not
    /// already carry one. It is never called for other vendors.
    ///
    /// # Errors
    /// - `Validation` if any row holds an out-of-domain value
    /// - `DuplicateKey` if VendorID or VendorName repeat
    pub fn load<F>(raw: &[RawVendorRecord], mut assign: F) -> Result<Self, RiskError>
    where
        F: FnMut() -> OwaspFinding,
    {
        let validated = RosterValidator::validate(raw)?;

        let vendors = validated
            .into_iter()
            .map(|vendor| {
                let check = match vendor.owasp_llm_check {
                    Some(check) => check,
                    None => ScoringEngine::owasp_llm_check(&vendor.profile, &mut assign),
                };
                ScoringEngine::score(vendor.profile, check)
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Scored {} vendor(s)", vendors.len());
        Ok(Self { vendors })
    }

    /// Builds a dataset from vendors that were already scored.
    pub fn from_scored(vendors: Vec<ScoredVendor>) -> Self {
        Self { vendors }
    }

    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&ScoredVendor) -> bool,
    {
        Self {
            vendors: self
                .vendors
                .iter()
                .filter(|vendor| predicate(vendor))
                .cloned()
                .collect(),
        }
    }

    /// Filters by the compiled predicate of `selection`.
    pub fn filter_by(&self, selection: &FilterSelection) -> Self {
        let predicate = FilterPredicateBuilder::build(selection);
        self.filter(|vendor| predicate.matches(vendor))
    }

    /// Reduces each vendor to `fields`, in dataset order.
    pub fn project(&self, fields: &[Field]) -> Vec<ProjectedRow> {
        self.vendors
            .iter()
            .map(|vendor| ProjectedRow::from_vendor(vendor, fields))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredVendor> {
        self.vendors.iter()
    }

    pub fn vendors(&self) -> &[ScoredVendor] {
        &self.vendors
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ScoredVendor;
    type IntoIter = std::slice::Iter<'a, ScoredVendor>;

    fn into_iter(self) -> Self::IntoIter {
        self.vendors.iter()
    }
}
