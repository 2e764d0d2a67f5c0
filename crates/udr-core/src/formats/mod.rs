//! Format handlers, one per record layout.
//!
//! Each handler owns a shape predicate and an extraction function. The
//! dispatcher only calls [`FormatHandler::extract`] after
//! [`FormatHandler::is_shape_valid`] has accepted the payload, so extraction
//! may assume a well-shaped payload.

pub mod default;
pub mod extended;
pub mod hex;

use crate::types::{FormatKind, RawFields};

/// Separator between the ID token and the payload, and between payload
/// tokens.
pub const FIELD_SEPARATOR: char = ',';

/// Behaviour shared by every record layout.
pub trait FormatHandler: Send + Sync {
    /// True if `payload` has the shape this layout expects.
    fn is_shape_valid(&self, payload: &str) -> bool;

    /// Pull raw field candidates out of a payload accepted by
    /// [`is_shape_valid`](Self::is_shape_valid).
    fn extract<'a>(&self, id_token: &'a str, payload: &'a str) -> RawFields<'a>;
}

impl FormatKind {
    /// The handler for this layout.
    pub fn handler(self) -> &'static dyn FormatHandler {
        match self {
            FormatKind::Hex => &hex::HexFormat,
            FormatKind::Extended => &extended::ExtendedFormat,
            FormatKind::Default => &default::DefaultFormat,
        }
    }
}

/// Split a payload into its comma-separated tokens.
pub(crate) fn tokens(payload: &str) -> std::str::Split<'_, char> {
    payload.split(FIELD_SEPARATOR)
}
