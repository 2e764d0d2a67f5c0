//! Extended comma-delimited layout: `<id>4,<dmcc>,<mnc>,<bytes_used>,<cellid>`.

use super::{tokens, FormatHandler};
use crate::types::{RawFields, RawValue};

/// Number of payload tokens in an extended record.
pub const TOKEN_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedFormat;

impl FormatHandler for ExtendedFormat {
    fn is_shape_valid(&self, payload: &str) -> bool {
        tokens(payload).count() == TOKEN_COUNT
    }

    fn extract<'a>(&self, id_token: &'a str, payload: &'a str) -> RawFields<'a> {
        let mut parts = tokens(payload);
        let mut next = || parts.next().map(RawValue::from);
        RawFields {
            dmcc: next(),
            mnc: next(),
            bytes_used: next(),
            cellid: next(),
            ..RawFields::with_id(id_token)
        }
    }
}
