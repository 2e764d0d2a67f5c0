//! Compact numeric layout: `<id>,<bytes_used>`.

use super::{tokens, FormatHandler};
use crate::normalizer::is_numeric_literal;
use crate::types::RawFields;

/// Catch-all layout for every discriminant without a dedicated handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormat;

impl FormatHandler for DefaultFormat {
    fn is_shape_valid(&self, payload: &str) -> bool {
        let mut parts = tokens(payload);
        matches!((parts.next(), parts.next()), (Some(only), None) if is_numeric_literal(only))
    }

    fn extract<'a>(&self, id_token: &'a str, payload: &'a str) -> RawFields<'a> {
        RawFields {
            bytes_used: Some(payload.into()),
            ..RawFields::with_id(id_token)
        }
    }
}
