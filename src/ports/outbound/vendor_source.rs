use crate::risk_assessment::domain::RawVendorRecord;
use crate::shared::Result;

/// VendorSource port for obtaining raw roster rows
///
/// The core only relies on the column contract and on a stable row order,
/// which drives VendorID assignment for rows that have none. Whether the
/// rows come from a file, a generator or a database is up to the adapter.
pub trait VendorSource {
    /// Reads every roster row in source order
    ///
    /// # Errors
    /// Returns an error if the source is missing, unreadable or not a
    /// well-formed table
    fn read_vendors(&self) -> Result<Vec<RawVendorRecord>>;

    /// Human-readable identity of the source, also used as the cache key
    fn describe(&self) -> String;
}
