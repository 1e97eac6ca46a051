/// Generated data for demos and tests
mod random_owasp_assigner;
mod synthetic_vendor_source;

pub use random_owasp_assigner::RandomOwaspAssigner;
pub use synthetic_vendor_source::SyntheticVendorSource;
