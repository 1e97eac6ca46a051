use crate::ports::outbound::VendorSource;
use crate::risk_assessment::domain::{
    Iso27001Compliance, NistCsfAdoption, RawInteger, RawVendorRecord, ServiceType,
};
use crate::shared::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const COUNTRIES: [&str; 7] = [
    "USA",
    "UK",
    "Germany",
    "India",
    "Canada",
    "Ghana",
    "Singapore",
];

/// SyntheticVendorSource adapter generating a random roster
///
/// The roster is a pure function of `(count, seed)`, so every read returns
/// the same rows and the scored dataset can be reused from the cache.
/// Rows leave `OWASP_LLM_Check` empty; checks are drawn at scoring time.
pub struct SyntheticVendorSource {
    count: usize,
    seed: u64,
}

impl SyntheticVendorSource {
    /// Creates a generator; without a seed one is drawn once from entropy
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        Self {
            count,
            seed: seed.unwrap_or_else(rand::random),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn pick<T: Copy, R: Rng>(rng: &mut R, values: &[T]) -> T {
        *values.choose(rng).expect("category lists are never empty")
    }

    fn generate(&self) -> Vec<RawVendorRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.count)
            .map(|i| RawVendorRecord {
                vendor_id: Some(RawInteger::Int(i as i64)),
                vendor_name: format!("Vendor_{:03}", i),
                service_type: Self::pick(&mut rng, &ServiceType::ALL).as_str().to_string(),
                country: Self::pick(&mut rng, &COUNTRIES).to_string(),
                risk_impact: RawInteger::Int(rng.gen_range(1..=5)),
                risk_likelihood: RawInteger::Int(rng.gen_range(1..=5)),
                open_vulnerabilities: RawInteger::Int(rng.gen_range(0..50)),
                incident_history: RawInteger::Int(rng.gen_range(0..5)),
                iso27001_compliance: Self::pick(&mut rng, &Iso27001Compliance::ALL)
                    .as_str()
                    .to_string(),
                nist_csf_adoption: Self::pick(&mut rng, &NistCsfAdoption::ALL)
                    .as_str()
                    .to_string(),
                owasp_llm_check: None,
            })
            .collect()
    }
}

impl VendorSource for SyntheticVendorSource {
    fn read_vendors(&self) -> Result<Vec<RawVendorRecord>> {
        let rows = self.generate();
        log::debug!(
            "Generated {} synthetic vendor(s) with seed {}",
            rows.len(),
            self.seed
        );
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!(
            "synthetic roster ({} vendors, seed {})",
            self.count, self.seed
        )
    }
}
