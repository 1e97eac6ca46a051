use crate::application::dataset_cache::DatasetCache;
use crate::application::dto::{AssessmentRequest, AssessmentResponse, AssessmentWarning};
use crate::application::read_models::{RiskReport, RiskReportBuilder};
use crate::ports::inbound::RiskAssessmentPort;
use crate::ports::outbound::{OwaspAssigner, ProgressReporter, VendorSource};
use crate::risk_assessment::domain::Dataset;
use crate::risk_assessment::services::DatasetFingerprint;
use crate::shared::Result;
use std::sync::Arc;

/// AssessVendorsUseCase - Core use case for vendor risk assessment
///
/// Loads the roster, scores it, applies the requested filter selection and
/// aggregates the result into a `RiskReport`. Infrastructure is injected
/// through generic type parameters.
///
/// # Type Parameters
/// * `VS` - VendorSource implementation
/// * `OA` - OwaspAssigner implementation
/// * `PR` - ProgressReporter implementation
pub struct AssessVendorsUseCase<VS, OA, PR> {
    vendor_source: VS,
    owasp_assigner: OA,
    progress_reporter: PR,
    cache: DatasetCache,
}

impl<VS, OA, PR> AssessVendorsUseCase<VS, OA, PR>
where
    VS: VendorSource,
    OA: OwaspAssigner,
    PR: ProgressReporter,
{
    pub fn new(vendor_source: VS, owasp_assigner: OA, progress_reporter: PR) -> Self {
        Self {
            vendor_source,
            owasp_assigner,
            progress_reporter,
            cache: DatasetCache::new(),
        }
    }

    /// Executes the assessment
    pub fn execute(&self, request: AssessmentRequest) -> Result<AssessmentResponse> {
        // Step 1: Read raw rows and fingerprint them
        let source = self.vendor_source.describe();
        let (dataset, fingerprint) = self.load_dataset(&source)?;

        // Step 2: Resolve the selection against the loaded roster and filter
        let selection = request.filters.resolve(&dataset);
        let filtered = dataset.filter_by(&selection);
        if filtered.len() < dataset.len() {
            self.progress_reporter.report(&format!(
                "🔎 {} of {} vendor(s) match the current filters",
                filtered.len(),
                dataset.len()
            ));
        }

        // Step 3: Aggregate
        let report = RiskReportBuilder::build(
            &dataset,
            &filtered,
            &selection,
            request.high_risk_threshold,
            &source,
            &fingerprint,
        );

        // Step 4: Warnings for degenerate but valid selections
        let warnings = Self::collect_warnings(&dataset, &report);
        for warning in &warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }

        Ok(AssessmentResponse::new(report, warnings))
    }

    /// Reads the source and returns the scored dataset, reusing the cached
    /// one when the raw rows are unchanged
    fn load_dataset(&self, source: &str) -> Result<(Arc<Dataset>, DatasetFingerprint)> {
        self.progress_reporter
            .report(&format!("📖 Loading vendor roster from: {}", source));

        let raw = self.vendor_source.read_vendors()?;
        let fingerprint = DatasetFingerprint::of(&raw);

        let dataset = self.cache.get_or_load(source, fingerprint, || {
            Dataset::load(&raw, || self.owasp_assigner.assign())
        })?;

        self.progress_reporter
            .report(&format!("✅ Scored {} vendor(s)", dataset.len()));
        Ok((dataset, fingerprint))
    }

    fn collect_warnings(dataset: &Dataset, report: &RiskReport) -> Vec<AssessmentWarning> {
        let mut warnings = Vec::new();
        if report.key_indicators.total_vendors == 0 {
            warnings.push(AssessmentWarning::EmptyResult {
                total_vendors: dataset.len(),
            });
        } else if report.ai_assessment.is_none() {
            warnings.push(AssessmentWarning::NoAiVendors);
        }
        warnings
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }
}

impl<VS, OA, PR> RiskAssessmentPort for AssessVendorsUseCase<VS, OA, PR>
where
    VS: VendorSource,
    OA: OwaspAssigner,
    PR: ProgressReporter,
{
    fn assess(&self, request: AssessmentRequest) -> Result<AssessmentResponse> {
        self.execute(request)
    }
}
