//! Cursor module
//!
//! Opaque cursor tokens for Relay connections.
//!
//! # Overview
//!
//! A cursor is the base64 encoding of a key specification's namespace
//! followed by the record's key field values, each prefixed with `:`.
//! Cursors are compared for equality only; nothing in the pagination path
//! needs to decode them.

mod codec;
mod types;

pub use codec::{CursorCodec, MAX_CURSOR_LEN, SEGMENT_SEPARATOR};
pub use types::{Cursor, KeySpec, DEFAULT_CURSOR_NAME};
