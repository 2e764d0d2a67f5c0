//! Test builders: ergonomic constructors for expected `UsageRecord` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use udr::UsageRecord;

/// Fluent builder for expected [`UsageRecord`] values.
///
/// # Example
///
/// ```rust
/// let expected = RecordBuilder::new()
///     .id(14)
///     .dmcc("310")
///     .mnc(260)
///     .build();
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    record: UsageRecord,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.record.id = Some(id);
        self
    }

    pub fn dmcc(mut self, dmcc: impl Into<String>) -> Self {
        self.record.dmcc = Some(dmcc.into());
        self
    }

    pub fn mnc(mut self, mnc: i64) -> Self {
        self.record.mnc = Some(mnc);
        self
    }

    pub fn bytes_used(mut self, bytes_used: i64) -> Self {
        self.record.bytes_used = Some(bytes_used);
        self
    }

    pub fn cellid(mut self, cellid: i64) -> Self {
        self.record.cellid = Some(cellid);
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.record.ip = Some(ip.into());
        self
    }

    pub fn build(self) -> UsageRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Expected record for a default-layout line.
pub fn default_record(id: i64, bytes_used: i64) -> UsageRecord {
    RecordBuilder::new().id(id).bytes_used(bytes_used).build()
}

/// Expected record for an extended-layout line.
pub fn extended_record(id: i64, dmcc: &str, mnc: i64, bytes_used: i64, cellid: i64) -> UsageRecord {
    RecordBuilder::new()
        .id(id)
        .dmcc(dmcc)
        .mnc(mnc)
        .bytes_used(bytes_used)
        .cellid(cellid)
        .build()
}

/// Expected record for a hex-layout line.
pub fn hex_record(id: i64, mnc: i64, bytes_used: i64, cellid: i64, ip: &str) -> UsageRecord {
    RecordBuilder::new()
        .id(id)
        .mnc(mnc)
        .bytes_used(bytes_used)
        .cellid(cellid)
        .ip(ip)
        .build()
}
