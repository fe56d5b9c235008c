//! Cursor codec
//!
//! Owns the token format: standard padded base64 over
//! `name(:value)*`. Only encoding is needed for pagination; decoding exists
//! for diagnostics and strict argument checking.

use super::types::{Cursor, KeySpec};
use crate::error::{Error, Result};
use crate::types::Record;
use base64::prelude::*;

/// Separator written before every key field value
pub const SEGMENT_SEPARATOR: char = ':';

/// Upper bound on the length of a cursor token accepted by [`CursorCodec::decode`]
pub const MAX_CURSOR_LEN: usize = 8 * 1024;

/// Encodes and decodes cursor tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorCodec;

impl CursorCodec {
    /// Build the composite key for a record: the namespace followed by
    /// `:value` for every key field, missing fields contributing `:` alone
    pub fn composite_key<R: Record + ?Sized>(key_spec: &KeySpec, record: &R) -> String {
        let mut key = String::with_capacity(key_spec.name.len() + key_spec.fields.len() * 8);
        key.push_str(&key_spec.name);
        for field in &key_spec.fields {
            key.push(SEGMENT_SEPARATOR);
            if let Some(value) = record.field(field) {
                key.push_str(&value);
            }
        }
        key
    }

    /// Encode the cursor of a record
    pub fn encode<R: Record + ?Sized>(key_spec: &KeySpec, record: &R) -> Cursor {
        let key = Self::composite_key(key_spec, record);
        Cursor::new(BASE64_STANDARD.encode(key.as_bytes()))
    }

    /// Decode a cursor token back into its composite key
    pub fn decode(cursor: &str) -> Result<String> {
        if cursor.is_empty() {
            return Err(Error::malformed_cursor(cursor, "cursor is empty"));
        }

        if cursor.len() > MAX_CURSOR_LEN {
            return Err(Error::malformed_cursor(
                truncate_for_display(cursor),
                format!(
                    "cursor exceeds max length: {} chars (max {MAX_CURSOR_LEN})",
                    cursor.len()
                ),
            ));
        }

        let bytes = BASE64_STANDARD
            .decode(cursor)
            .map_err(|e| Error::malformed_cursor(cursor, format!("invalid base64: {e}")))?;

        String::from_utf8(bytes)
            .map_err(|_| Error::malformed_cursor(cursor, "decoded cursor is not valid UTF-8"))
    }

    /// Check that a cursor decodes and belongs to the key specification's namespace
    pub fn validate(key_spec: &KeySpec, cursor: &str) -> Result<()> {
        let key = Self::decode(cursor)?;

        let in_namespace = if key_spec.fields.is_empty() {
            key == key_spec.name
        } else {
            key.strip_prefix(key_spec.name.as_str())
                .is_some_and(|rest| rest.starts_with(SEGMENT_SEPARATOR))
        };

        if in_namespace {
            Ok(())
        } else {
            Err(Error::malformed_cursor(
                cursor,
                format!("cursor does not belong to namespace '{}'", key_spec.name),
            ))
        }
    }
}

fn truncate_for_display(cursor: &str) -> String {
    let mut end = 32.min(cursor.len());
    while !cursor.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &cursor[..end])
}
