/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and reaches infrastructure
/// only through ports.
pub mod dataset_cache;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;

pub use dataset_cache::DatasetCache;
