//! Hex-packed layout: `<id>6,<24 lowercase hex digits>`.
//!
//! The payload is a fixed-width big-endian byte layout written out as hex:
//!
//! ```text
//! offset  0    4    8        16 18 20 22 24
//!         │mnc │bytes│cellid  │o1│o2│o3│o4│
//! ```
//!
//! `o1..o4` are the IPv4 octets in address order. The slice boundaries are
//! a wire contract and must not move.

use super::FormatHandler;
use crate::types::{RawFields, RawValue, UsageRecord};
use std::ops::Range;

/// Exact payload length in hex digits.
pub const PAYLOAD_LEN: usize = 24;

const MNC: Range<usize> = 0..4;
const BYTES_USED: Range<usize> = 4..8;
const CELLID: Range<usize> = 8..16;
const IP_OCTETS: [Range<usize>; 4] = [16..18, 18..20, 20..22, 22..24];

#[derive(Debug, Clone, Copy, Default)]
pub struct HexFormat;

impl FormatHandler for HexFormat {
    fn is_shape_valid(&self, payload: &str) -> bool {
        payload.len() == PAYLOAD_LEN
            && payload
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    fn extract<'a>(&self, id_token: &'a str, payload: &'a str) -> RawFields<'a> {
        RawFields {
            mnc: decode(payload, MNC).map(RawValue::Int),
            bytes_used: decode(payload, BYTES_USED).map(RawValue::Int),
            cellid: decode(payload, CELLID).map(RawValue::Int),
            ip: decode_ip(payload).map(RawValue::from),
            ..RawFields::with_id(id_token)
        }
    }
}

fn decode(payload: &str, range: Range<usize>) -> Option<i64> {
    let slice = payload.get(range)?;
    u32::from_str_radix(slice, 16).ok().map(i64::from)
}

fn decode_ip(payload: &str) -> Option<String> {
    let mut octets = [0u8; 4];
    for (octet, range) in octets.iter_mut().zip(IP_OCTETS) {
        *octet = u8::from_str_radix(payload.get(range)?, 16).ok()?;
    }
    let [a, b, c, d] = octets;
    Some(format!("{a}.{b}.{c}.{d}"))
}

/// Pack a record back into the 24-digit hex layout.
///
/// Returns `None` if `mnc`, `bytes_used`, `cellid` or `ip` is absent, or if a
/// value does not fit its slot (`mnc` and `bytes_used` are 16 bits, `cellid`
/// is 32 bits, `ip` must be a valid dotted quad). The ID is not part of the
/// payload and is ignored.
pub fn encode(record: &UsageRecord) -> Option<String> {
    let mnc = u16::try_from(record.mnc?).ok()?;
    let bytes_used = u16::try_from(record.bytes_used?).ok()?;
    let cellid = u32::try_from(record.cellid?).ok()?;
    let ip = record.ip.as_deref()?;
    if !crate::normalizer::is_dotted_quad(ip) {
        return None;
    }

    let mut out = format!("{mnc:04x}{bytes_used:04x}{cellid:08x}");
    for octet in ip.split('.') {
        let octet: u8 = octet.parse().ok()?;
        out.push_str(&format!("{octet:02x}"));
    }
    Some(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
