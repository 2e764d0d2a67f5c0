//! Dispatcher: splits a raw line and routes it to a format handler.
//!
//! Layouts are tried in [`FormatKind::PRECEDENCE`] order: hex, extended,
//! then default. The first layout whose discriminant matches wins, and its
//! shape check decides whether the line parses at all. A line that fails
//! here is rejected as a whole; field-level problems are left to the
//! normalizer.

use crate::config::DispatchConfig;
use crate::formats::FIELD_SEPARATOR;
use crate::normalizer::normalize;
use crate::types::{FormatKind, UsageRecord};

/// Why a line could not be parsed into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("no `,` between ID and payload")]
    MissingSeparator,
    #[error("payload does not have the {kind} layout shape")]
    InvalidShape { kind: FormatKind },
    #[error("line is not valid UTF-8")]
    NotUtf8,
}

/// A line split into its ID token and payload, with the layout selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLine<'a> {
    pub id_token: &'a str,
    pub kind: FormatKind,
    /// Everything after the first separator, untouched.
    pub payload: &'a str,
}

impl FormatKind {
    /// True if this layout claims `discriminant`. `None` (an empty ID) is
    /// only claimed by the default layout.
    pub fn claims(self, discriminant: Option<char>, config: &DispatchConfig) -> bool {
        match self {
            FormatKind::Hex => discriminant == Some(config.hex_discriminant),
            FormatKind::Extended => discriminant == Some(config.extended_discriminant),
            FormatKind::Default => true,
        }
    }

    /// Select the layout for an ID token.
    pub fn select(id_token: &str, config: &DispatchConfig) -> FormatKind {
        let discriminant = id_token.chars().next_back();
        // `Default` claims every discriminant, so the fallback is never taken.
        FormatKind::PRECEDENCE
            .into_iter()
            .find(|kind| kind.claims(discriminant, config))
            .unwrap_or(FormatKind::Default)
    }
}

/// Split `line`, select its layout and check the payload shape.
pub fn classify_and_split<'a>(
    line: &'a str,
    config: &DispatchConfig,
) -> Result<SplitLine<'a>, DispatchError> {
    let (id_token, payload) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or(DispatchError::MissingSeparator)?;
    let kind = FormatKind::select(id_token, config);

    if !kind.handler().is_shape_valid(payload) {
        return Err(DispatchError::InvalidShape { kind });
    }

    Ok(SplitLine {
        id_token,
        kind,
        payload,
    })
}

/// Run one line through the full pipeline.
pub fn dispatch(line: &str, config: &DispatchConfig) -> Result<UsageRecord, DispatchError> {
    let split = classify_and_split(line, config)?;
    tracing::trace!(kind = %split.kind, id = split.id_token, "layout selected");
    let raw = split.kind.handler().extract(split.id_token, split.payload);
    Ok(normalize(raw))
}

/// [`dispatch`] over raw bytes. Non-UTF-8 input is rejected.
pub fn dispatch_bytes(line: &[u8], config: &DispatchConfig) -> Result<UsageRecord, DispatchError> {
    let line = std::str::from_utf8(line).map_err(|_| DispatchError::NotUtf8)?;
    dispatch(line, config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
