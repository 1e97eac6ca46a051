use vendor_risk::prelude::*;

/// Mock VendorSource for testing
pub struct MockVendorSource {
    pub rows: Vec<RawVendorRecord>,
    pub should_fail: bool,
}

impl MockVendorSource {
    pub fn new(rows: Vec<RawVendorRecord>) -> Self {
        Self {
            rows,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            rows: Vec::new(),
            should_fail: true,
        }
    }
}

impl VendorSource for MockVendorSource {
    fn read_vendors(&self) -> Result<Vec<RawVendorRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock roster read failure");
        }
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        "mock roster".to_string()
    }
}
