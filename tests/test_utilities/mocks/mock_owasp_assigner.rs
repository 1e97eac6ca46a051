use std::sync::atomic::{AtomicUsize, Ordering};
use vendor_risk::prelude::*;

/// Mock OwaspAssigner cycling through a fixed list of findings
pub struct MockOwaspAssigner {
    findings: Vec<OwaspFinding>,
    draws: AtomicUsize,
}

impl MockOwaspAssigner {
    pub fn new(findings: Vec<OwaspFinding>) -> Self {
        Self {
            findings,
            draws: AtomicUsize::new(0),
        }
    }

    pub fn always(category: OwaspRiskCategory, status: OwaspStatus) -> Self {
        Self::new(vec![OwaspFinding::new(category, status)])
    }

    pub fn draw_count(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl OwaspAssigner for MockOwaspAssigner {
    fn assign(&self) -> OwaspFinding {
        let n = self.draws.fetch_add(1, Ordering::SeqCst);
        self.findings[n % self.findings.len()]
    }
}
