//! Window module
//!
//! Range extraction between `after`/`before` cursors.
//!
//! # Overview
//!
//! [`extract`] walks the whole collection once, pairing every record with its
//! cursor, keeping only the records strictly between the `after` and
//! `before` matches. It also records the cursors of the first and last record
//! of the unfiltered collection, which the paginator needs to decide whether
//! more data exists beyond the returned window.

mod extractor;
mod types;

pub use extractor::extract;
pub use types::{Edge, Window};
