//! Static usage-line corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative lines for
//! one layout. `corpus_high_volume` builds a large mixed corpus for the
//! parallel batch path.

/// Default layout: `<id>,<bytes_used>`.
pub const CORPUS_DEFAULT: &[&str] = &[
    "123,500",
    "1,0",
    "900001,4294967296",
    "77,-15",
    "abc,12",
];

/// Hex layout: `<id>6,<24 hex digits>`.
pub const CORPUS_HEX: &[&str] = &[
    "45546,deadbeef00000000cafe0102",
    "6,000000000000000000000000",
    "16,ffffffffffffffffffffffff",
    "1006,0136004000001f407f000001",
    "x6,00010002000000030a000001",
];

/// Extended layout: `<id>4,<dmcc>,<mnc>,<bytes_used>,<cellid>`.
pub const CORPUS_EXTENDED: &[&str] = &[
    "14,310,260,1024,77",
    "204,mcc-234,15,99999,4001",
    "4,,,,",
    "34,310,two,1024,77",
    "44,310,-1,0,18446744073709551616",
];

/// Lines that must be rejected as a whole.
pub const CORPUS_MALFORMED: &[&str] = &[
    "",
    "123500",
    "77,1,2,3,4",
    "123,",
    "14,1,2,3",
    "14,1,2,3,4,5",
    "16,DEADBEEF00000000CAFE0102",
    "16,deadbeef00000000cafe01",
    "16,deadbeef00000000cafe0102,",
];

/// A mixed batch with good and bad lines interleaved.
pub const CORPUS_MIXED: &[&str] = &[
    "123,500",
    "45546,deadbeef00000000cafe0102",
    "77,1,2,3,4",
    "14,310,260,1024,77",
    "no-separator",
    "16,0001000200000003ff000001",
];

/// Generate `n` lines cycling through all three layouts plus one malformed
/// line every tenth slot.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match i % 10 {
            0 => format!("{i}"),
            1..=3 => format!("{i}4,310,{},{},{}", i % 1000, i * 8, i % 65_536),
            4..=6 => format!("{}6,{:04x}{:04x}{:08x}0a000001", i, i % 1000, i % 65_536, i),
            _ => format!("{i}1,{}", i * 3),
        })
        .collect()
}
