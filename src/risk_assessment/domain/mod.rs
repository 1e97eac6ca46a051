pub mod categories;
pub mod dataset;
pub mod field;
pub mod filter_selection;
pub mod owasp;
pub mod raw_vendor_record;
pub mod vendor;

pub use categories::{Iso27001Compliance, NistCsfAdoption, RiskLevel, ServiceType};
pub use dataset::Dataset;
pub use field::{Field, FieldValue, NumericField, ProjectedRow};
pub use filter_selection::FilterSelection;
pub use owasp::{OwaspFinding, OwaspLlmCheck, OwaspRiskCategory, OwaspStatus};
pub use raw_vendor_record::{RawInteger, RawVendorRecord};
pub use vendor::{RiskRating, ScoredVendor, VendorId, VendorProfile};
