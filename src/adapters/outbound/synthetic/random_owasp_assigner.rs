use crate::ports::outbound::OwaspAssigner;
use crate::risk_assessment::domain::{OwaspFinding, OwaspRiskCategory, OwaspStatus};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// RandomOwaspAssigner adapter drawing category and status uniformly
pub struct RandomOwaspAssigner {
    rng: RefCell<StdRng>,
}

impl RandomOwaspAssigner {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic assigner for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomOwaspAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl OwaspAssigner for RandomOwaspAssigner {
    fn assign(&self) -> OwaspFinding {
        let mut rng = self.rng.borrow_mut();
        let category = *OwaspRiskCategory::ALL
            .choose(&mut *rng)
            .expect("OWASP category list is never empty");
        let status = *OwaspStatus::ALL
            .choose(&mut *rng)
            .expect("OWASP status list is never empty");
        OwaspFinding::new(category, status)
    }
}
