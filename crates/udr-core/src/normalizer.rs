//! Normalizer: coerces raw field candidates into a [`UsageRecord`].
//!
//! Every format handler funnels its output through [`normalize`], so the
//! shape of a record never depends on which layout produced it. The
//! normalizer has no failure path: a value that cannot be coerced becomes
//! `None` and the rest of the record is kept.

use crate::types::{RawFields, RawValue, UsageRecord};

/// Build the canonical record from raw candidates.
pub fn normalize(raw: RawFields<'_>) -> UsageRecord {
    UsageRecord {
        id: raw.id.as_ref().and_then(to_integer),
        dmcc: raw.dmcc.as_ref().and_then(to_text),
        mnc: raw.mnc.as_ref().and_then(to_integer),
        bytes_used: raw.bytes_used.as_ref().and_then(to_integer),
        cellid: raw.cellid.as_ref().and_then(to_integer),
        ip: raw.ip.as_ref().and_then(to_ipv4),
    }
}

fn to_integer(value: &RawValue<'_>) -> Option<i64> {
    match value {
        RawValue::Int(n) => Some(*n),
        RawValue::Text(s) => parse_integer(s),
    }
}

fn to_text(value: &RawValue<'_>) -> Option<String> {
    match value {
        RawValue::Text(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

fn to_ipv4(value: &RawValue<'_>) -> Option<String> {
    match value {
        RawValue::Text(s) if is_dotted_quad(s) => Some(s.to_string()),
        _ => None,
    }
}

/// Parse a decimal integer: optional sign followed by at least one ASCII
/// digit, nothing else. Overflowing values are rejected.
///
/// Empty strings, whitespace, decimals and `0x` literals all yield `None`.
pub fn parse_integer(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// True if `s` is written as a decimal number: optional sign, digits, an
/// optional `.digits` fraction and an optional `e`/`E` exponent.
///
/// Only the syntax is checked. Whether the value fits a field is up to
/// [`parse_integer`].
pub fn is_numeric_literal(s: &str) -> bool {
    fn digits(s: &str) -> (&str, &str) {
        let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
        s.split_at(end)
    }

    let (int, rest) = digits(s.strip_prefix(['+', '-']).unwrap_or(s));
    if int.is_empty() {
        return false;
    }
    let rest = match rest.strip_prefix('.') {
        Some(frac) => match digits(frac) {
            ("", _) => return false,
            (_, rest) => rest,
        },
        None => rest,
    };
    match rest.strip_prefix(['e', 'E']) {
        Some(exp) => {
            let (exp, rest) = digits(exp.strip_prefix(['+', '-']).unwrap_or(exp));
            !exp.is_empty() && rest.is_empty()
        }
        None => rest.is_empty(),
    }
}

/// True for `a.b.c.d` where each octet is 1–3 decimal digits in `0..=255`.
pub fn is_dotted_quad(s: &str) -> bool {
    let mut octets = 0;
    for part in s.split('.') {
        octets += 1;
        let valid = (1..=3).contains(&part.len())
            && part.bytes().all(|b| b.is_ascii_digit())
            && part.parse::<u16>().is_ok_and(|n| n <= 255);
        if !valid {
            return false;
        }
    }
    octets == 4
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
