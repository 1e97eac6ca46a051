pub mod aggregator;
pub mod filter_predicate;
pub mod fingerprint;
pub mod roster_validator;
pub mod scoring_engine;

pub use aggregator::{Aggregator, CategoryCount, RiskMatrixCell, ValueCounts};
pub use filter_predicate::{FilterPredicate, FilterPredicateBuilder};
pub use fingerprint::DatasetFingerprint;
pub use roster_validator::{RosterValidator, ValidatedVendor};
pub use scoring_engine::ScoringEngine;
