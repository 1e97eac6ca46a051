use crate::risk_assessment::domain::Dataset;
use crate::risk_assessment::services::DatasetFingerprint;
use crate::shared::error::RiskError;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory cache of scored datasets.
///
/// Entries are keyed by source and stamped with the fingerprint of the raw
/// rows they were built from. A lookup with a different fingerprint drops
/// the stale entry and rebuilds, so changed source data is never answered
/// with old scores. Reusing an entry also keeps previously drawn OWASP
/// findings stable across reloads of unchanged data.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: DashMap<String, (DatasetFingerprint, Arc<Dataset>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dataset cached for `source` if its fingerprint matches,
    /// otherwise builds it with `load` and caches the result.
    ///
    /// Failed loads are not cached.
    pub fn get_or_load<F>(
        &self,
        source: &str,
        fingerprint: DatasetFingerprint,
        load: F,
    ) -> Result<Arc<Dataset>, RiskError>
    where
        F: FnOnce() -> Result<Dataset, RiskError>,
    {
        if let Some(entry) = self.entries.get(source) {
            let (cached_fingerprint, dataset) = entry.value();
            if *cached_fingerprint == fingerprint {
                log::debug!("Dataset cache hit for {} ({})", source, fingerprint.short());
                return Ok(Arc::clone(dataset));
            }
        }

        if self.entries.remove(source).is_some() {
            log::debug!("Source {} changed; evicted cached dataset", source);
        }

        let dataset = Arc::new(load()?);
        self.entries
            .insert(source.to_string(), (fingerprint, Arc::clone(&dataset)));
        Ok(dataset)
    }

    pub fn invalidate(&self, source: &str) {
        self.entries.remove(source);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
