//! Core types for udr-core: usage data records.
//!
//! This module defines the data structures shared across the pipeline
//! layers: the normalised [`UsageRecord`], the unnormalised [`RawFields`]
//! produced by the format handlers, and the [`FormatKind`] discriminant.

use serde::Serialize;
use std::borrow::Cow;

/// A normalised usage record produced by the parser.
///
/// Every field is independently optional. The normalizer populates as many
/// fields as it can from the raw candidates; values that cannot be coerced
/// to their canonical type are left as `None` rather than failing the line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct UsageRecord {
    /// Numeric value of the ID token (including its discriminant digit).
    pub id: Option<i64>,
    /// Free-text DMCC. Only the extended format carries one.
    pub dmcc: Option<String>,
    /// Mobile network code.
    pub mnc: Option<i64>,
    /// Usage counter.
    pub bytes_used: Option<i64>,
    /// Cell tower identifier.
    pub cellid: Option<i64>,
    /// Dotted-quad IPv4 address. Only the hex format carries one.
    pub ip: Option<String>,
}

impl UsageRecord {
    /// Re-run the normalizer over this record.
    ///
    /// A record that came out of the normalizer is returned unchanged.
    pub fn normalized(&self) -> Self {
        crate::normalizer::normalize(RawFields::from(self))
    }

    /// True when every field is `None`.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// An unnormalised field candidate.
///
/// Handlers that work on text hand over the token untouched; the hex
/// handler decodes its slices up front and hands over integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue<'a> {
    Text(Cow<'a, str>),
    Int(i64),
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(s: &'a str) -> Self {
        RawValue::Text(Cow::Borrowed(s))
    }
}

impl From<String> for RawValue<'_> {
    fn from(s: String) -> Self {
        RawValue::Text(Cow::Owned(s))
    }
}

impl From<i64> for RawValue<'_> {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

/// Field candidates extracted by a format handler, before normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub id: Option<RawValue<'a>>,
    pub dmcc: Option<RawValue<'a>>,
    pub mnc: Option<RawValue<'a>>,
    pub bytes_used: Option<RawValue<'a>>,
    pub cellid: Option<RawValue<'a>>,
    pub ip: Option<RawValue<'a>>,
}

impl<'a> RawFields<'a> {
    /// Candidates with only the ID populated.
    pub fn with_id(id_token: &'a str) -> Self {
        Self {
            id: Some(id_token.into()),
            ..Self::default()
        }
    }
}

impl<'a> From<&'a UsageRecord> for RawFields<'a> {
    fn from(record: &'a UsageRecord) -> Self {
        let text = |v: &'a Option<String>| v.as_deref().map(RawValue::from);
        Self {
            id: record.id.map(RawValue::Int),
            dmcc: text(&record.dmcc),
            mnc: record.mnc.map(RawValue::Int),
            bytes_used: record.bytes_used.map(RawValue::Int),
            cellid: record.cellid.map(RawValue::Int),
            ip: text(&record.ip),
        }
    }
}

/// Record layout selected by the last character of the ID token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Hex,
    Extended,
    Default,
}

impl FormatKind {
    /// Selection order. Specific layouts come first; `Default` accepts
    /// every discriminant and must stay last.
    pub const PRECEDENCE: [FormatKind; 3] =
        [FormatKind::Hex, FormatKind::Extended, FormatKind::Default];
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Hex => write!(f, "hex"),
            FormatKind::Extended => write!(f, "extended"),
            FormatKind::Default => write!(f, "default"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
