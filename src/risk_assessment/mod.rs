/// Risk assessment domain - vendor schema, scoring rules, filtering and aggregation
///
/// Nothing in this module performs I/O; data sources and randomness come in
/// through the application layer.
pub mod domain;
pub mod policies;
pub mod services;
