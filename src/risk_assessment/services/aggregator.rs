use crate::risk_assessment::domain::{Dataset, Field, FieldValue, NumericField, RiskRating};
use serde::Serialize;
use std::collections::HashMap;

/// Occurrences of one distinct value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Distinct values of a column with their counts.
///
/// Ordered by descending count; ties keep the order in which values were
/// first seen in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValueCounts {
    entries: Vec<CategoryCount>,
}

impl ValueCounts {
    fn tally<I>(values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut entries: Vec<CategoryCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for value in values {
            match index.get(&value) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(value.clone(), entries.len());
                    entries.push(CategoryCount { value, count: 1 });
                }
            }
        }

        // Stable sort keeps first-seen order among equal counts
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    pub fn get(&self, value: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map_or(0, |entry| entry.count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryCount> {
        self.entries.iter()
    }
}

/// Number of vendors at one impact/likelihood coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskMatrixCell {
    pub impact: u8,
    pub likelihood: u8,
    pub count: usize,
}

/// Summary statistics over a (usually filtered) dataset.
///
/// Every operation is total: an empty dataset yields zero counts, a mean of
/// 0.0 and empty distributions.
pub struct Aggregator<'a> {
    dataset: &'a Dataset,
}

impl<'a> Aggregator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn count(&self) -> usize {
        self.dataset.len()
    }

    /// Vendors whose `field` is strictly greater than `threshold`
    pub fn count_above_threshold(&self, field: NumericField, threshold: f64) -> usize {
        self.dataset
            .iter()
            .filter(|vendor| field.value(vendor) > threshold)
            .count()
    }

    /// Arithmetic mean of `field`; 0.0 for an empty dataset
    pub fn mean(&self, field: NumericField) -> f64 {
        if self.dataset.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.dataset.iter().map(|vendor| field.value(vendor)).sum();
        sum / self.dataset.len() as f64
    }

    pub fn value_counts(&self, field: Field) -> ValueCounts {
        ValueCounts::tally(
            self.dataset
                .iter()
                .map(|vendor| field.value(vendor).to_string()),
        )
    }

    /// Counts values of `field` by the part before the first `separator`.
    ///
    /// A value without the separator counts under the whole value, so `N/A`
    /// stays `N/A`.
    pub fn group_prefix_counts(&self, field: Field, separator: &str) -> ValueCounts {
        ValueCounts::tally(self.dataset.iter().map(|vendor| {
            let value = field.value(vendor).to_string();
            match value.split_once(separator) {
                Some((prefix, _)) => prefix.to_string(),
                None => value,
            }
        }))
    }

    /// Vendor counts for all 25 impact/likelihood pairs, impact-major.
    pub fn risk_matrix(&self) -> Vec<RiskMatrixCell> {
        let ratings: Vec<RiskRating> = (1..=5).filter_map(RiskRating::new).collect();
        let mut cells = Vec::with_capacity(ratings.len() * ratings.len());

        for impact in &ratings {
            for likelihood in &ratings {
                let count = self
                    .dataset
                    .iter()
                    .filter(|v| v.risk_impact() == *impact && v.risk_likelihood() == *likelihood)
                    .count();
                cells.push(RiskMatrixCell {
                    impact: impact.value(),
                    likelihood: likelihood.value(),
                    count,
                });
            }
        }
        cells
    }

    /// Distinct values of `field` in first-seen order
    pub fn distinct(&self, field: Field) -> Vec<FieldValue> {
        let mut seen: Vec<FieldValue> = Vec::new();
        for vendor in self.dataset {
            let value = field.value(vendor);
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk_assessment::domain::{
        OwaspFinding, OwaspRiskCategory, OwaspStatus, RawInteger, RawVendorRecord,
    };
    use crate::risk_assessment::domain::owasp::CHECK_SEPARATOR;
    use crate::risk_assessment::policies::HIGH_RISK_HEADLINE_THRESHOLD;

    fn raw(
        name: &str,
        service_type: &str,
        impact: i64,
        likelihood: i64,
        iso: &str,
        check: Option<&str>,
    ) -> RawVendorRecord {
        RawVendorRecord {
            vendor_id: None,
            vendor_name: name.to_string(),
            service_type: service_type.to_string(),
            country: "India".to_string(),
            risk_impact: impact.into(),
            risk_likelihood: likelihood.into(),
            open_vulnerabilities: RawInteger::Int(10),
            incident_history: RawInteger::Int(0),
            iso27001_compliance: iso.to_string(),
            nist_csf_adoption: "Low".to_string(),
            owasp_llm_check: check.map(str::to_string),
        }
    }

    fn dataset() -> Dataset {
        let rows = vec![
            raw("A", "Consulting", 4, 4, "Compliant", None),
            raw("B", "AI Model Provider", 4, 4, "Non-Compliant", Some("Prompt Injection: Vulnerable")),
            raw("C", "AI Model Provider", 2, 3, "Compliant", Some("Model Theft: Mitigated")),
            raw("D", "AI Model Provider", 5, 4, "Partially Compliant", Some("Prompt Injection: Mitigated")),
            raw("E", "Managed IT", 1, 1, "Non-Compliant", None),
        ];
        Dataset::load(&rows, || {
            OwaspFinding::new(OwaspRiskCategory::DataLeakage, OwaspStatus::Vulnerable)
        })
        .unwrap()
    }

    #[test]
    fn test_count() {
        let data = dataset();
        assert_eq!(Aggregator::new(&data).count(), 5);
        assert_eq!(Aggregator::new(&Dataset::default()).count(), 0);
    }

    #[test]
    fn test_count_above_threshold_is_strict() {
        let data = dataset();
        let aggregator = Aggregator::new(&data);

        // Scores: 16, 16, 6, 20, 1
        assert_eq!(
            aggregator.count_above_threshold(
                NumericField::OverallRiskScore,
                HIGH_RISK_HEADLINE_THRESHOLD as f64
            ),
            3
        );
        assert_eq!(
            aggregator.count_above_threshold(NumericField::OverallRiskScore, 16.0),
            1
        );
        assert_eq!(
            aggregator.count_above_threshold(NumericField::OverallRiskScore, 20.0),
            0
        );
    }

    #[test]
    fn test_mean() {
        let data = dataset();
        // Breach likelihood: 5, 25, 5, 15, 25
        assert_eq!(
            Aggregator::new(&data).mean(NumericField::BreachLikelihoodScore),
            15.0
        );
    }

    #[test]
    fn test_mean_of_empty_dataset_is_zero() {
        let empty = dataset().filter(|_| false);
        let mean = Aggregator::new(&empty).mean(NumericField::BreachLikelihoodScore);
        assert_eq!(mean, 0.0);
        assert!(!mean.is_nan());
    }

    #[test]
    fn test_value_counts_sorted_by_count_then_first_seen() {
        let data = dataset();
        let counts = Aggregator::new(&data).value_counts(Field::Iso27001Compliance);

        let pairs: Vec<(&str, usize)> = counts
            .iter()
            .map(|c| (c.value.as_str(), c.count))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Compliant", 2),
                ("Non-Compliant", 2),
                ("Partially Compliant", 1)
            ]
        );
    }

    #[test]
    fn test_value_counts_total_matches_count() {
        let data = dataset();
        let aggregator = Aggregator::new(&data);
        for field in [
            Field::ServiceType,
            Field::RiskLevel,
            Field::NistCsfAdoption,
            Field::IsAiVendor,
        ] {
            assert_eq!(aggregator.value_counts(field).total(), aggregator.count());
        }
    }

    #[test]
    fn test_value_counts_get_missing_value_is_zero() {
        let data = dataset();
        let counts = Aggregator::new(&data).value_counts(Field::ServiceType);
        assert_eq!(counts.get("AI Model Provider"), 3);
        assert_eq!(counts.get("SaaS Platform"), 0);
    }

    #[test]
    fn test_group_prefix_counts_splits_on_first_separator() {
        let data = dataset();
        let counts = Aggregator::new(&data).group_prefix_counts(Field::OwaspLlmCheck, CHECK_SEPARATOR);

        assert_eq!(counts.get("Prompt Injection"), 2);
        assert_eq!(counts.get("Model Theft"), 1);
        assert_eq!(counts.get("N/A"), 2);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_group_prefix_counts_without_separator_uses_whole_value() {
        let data = dataset();
        let counts = Aggregator::new(&data).group_prefix_counts(Field::VendorName, " | ");
        assert_eq!(counts.len(), 5);
        assert_eq!(counts.get("A"), 1);
    }

    #[test]
    fn test_risk_matrix_covers_every_cell() {
        let data = dataset();
        let matrix = Aggregator::new(&data).risk_matrix();

        assert_eq!(matrix.len(), 25);
        assert_eq!(matrix.iter().map(|c| c.count).sum::<usize>(), 5);
        let hot = matrix
            .iter()
            .find(|c| c.impact == 4 && c.likelihood == 4)
            .unwrap();
        assert_eq!(hot.count, 2);
        assert_eq!((matrix[0].impact, matrix[0].likelihood), (1, 1));
        assert_eq!((matrix[1].impact, matrix[1].likelihood), (1, 2));
    }

    #[test]
    fn test_empty_dataset_aggregates() {
        let empty = Dataset::default();
        let aggregator = Aggregator::new(&empty);

        assert_eq!(
            aggregator.count_above_threshold(NumericField::OverallRiskScore, 15.0),
            0
        );
        assert!(aggregator.value_counts(Field::Country).is_empty());
        assert!(aggregator
            .group_prefix_counts(Field::OwaspLlmCheck, CHECK_SEPARATOR)
            .is_empty());
        assert!(aggregator.risk_matrix().iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_distinct_in_first_seen_order() {
        let data = dataset();
        let levels = Aggregator::new(&data).distinct(Field::RiskLevel);
        assert_eq!(
            levels,
            vec![
                FieldValue::Text("Medium".to_string()),
                FieldValue::Text("Low".to_string()),
                FieldValue::Text("High".to_string()),
            ]
        );
    }
}
