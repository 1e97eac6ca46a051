/// Filesystem adapters for roster input and report output
mod csv_vendor_reader;
mod file_writer;

pub use csv_vendor_reader::CsvVendorSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
