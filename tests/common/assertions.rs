//! Domain-specific assertion macros for udr harnesses.
//!
//! These add context-rich failure messages that make it clear which line
//! was parsed and which slot of a batch misbehaved.

/// Assert that a line parses to a record equal to `expected`.
///
/// ```rust
/// assert_parses_to!("123,500", default_record(123, 500));
/// ```
#[macro_export]
macro_rules! assert_parses_to {
    ($line:expr, $expected:expr) => {{
        let line: &str = $line;
        let expected: udr::UsageRecord = $expected;
        match udr::parse_line(line) {
            Some(actual) => pretty_assertions::assert_eq!(actual, expected, "line: {:?}", line),
            None => panic!(
                "assert_parses_to! failed: line was rejected.\n  line: {:?}\n  expected: {:?}",
                line, expected
            ),
        }
    }};
}

/// Assert that a line is rejected as a whole.
#[macro_export]
macro_rules! assert_rejected {
    ($line:expr) => {{
        let line: &str = $line;
        if let Some(record) = udr::parse_line(line) {
            panic!(
                "assert_rejected! failed: line parsed.\n  line: {:?}\n  record: {:?}",
                line, record
            );
        }
    }};
}

/// Assert that a batch result has `expected.len()` slots and that each slot
/// is present or absent as listed.
///
/// ```rust
/// assert_slots!(records, [true, false, true]);
/// ```
#[macro_export]
macro_rules! assert_slots {
    ($records:expr, $expected:expr) => {{
        let records: &[Option<udr::UsageRecord>] = &$records;
        let expected: &[bool] = &$expected;
        assert_eq!(
            records.len(),
            expected.len(),
            "assert_slots! failed: slot count differs"
        );
        for (i, (slot, present)) in records.iter().zip(expected).enumerate() {
            if slot.is_some() != *present {
                panic!(
                    "assert_slots! failed at slot {}:\n  expected present: {}\n  actual: {:?}",
                    i, present, slot
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Record invariant helpers
// ---------------------------------------------------------------------------

/// Assert the layout-independent invariants of a parsed record: an `ip`, if
/// present, is a valid dotted quad, and a `dmcc`, if present, is non-empty.
pub fn assert_record_invariants(record: &udr::UsageRecord) {
    if let Some(ip) = &record.ip {
        assert!(
            udr_core::normalizer::is_dotted_quad(ip),
            "record ip must be a dotted quad: {:?}",
            record
        );
    }
    if let Some(dmcc) = &record.dmcc {
        assert!(!dmcc.is_empty(), "record dmcc must not be empty: {:?}", record);
    }
}
