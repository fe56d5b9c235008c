//! Window extraction

use super::types::{Edge, Window};
use crate::cursor::{Cursor, CursorCodec, KeySpec};
use crate::types::Record;
use tracing::{debug, trace};

/// Extract the edges strictly between `after` and `before`
///
/// A record matching `after` discards everything accumulated so far,
/// itself included. A record matching `before` ends accumulation, itself
/// excluded. Empty or non-matching cursors filter nothing. Boundary cursors
/// always describe the full collection.
pub fn extract<'a, R: Record>(
    collection: &'a [R],
    key_spec: &KeySpec,
    after: Option<&str>,
    before: Option<&str>,
) -> Window<&'a R> {
    let after = after.filter(|c| !c.is_empty());
    let before = before.filter(|c| !c.is_empty());

    let mut edges = Vec::new();
    let mut first_boundary_cursor = Cursor::default();
    let mut last_boundary_cursor = Cursor::default();
    let mut stopped = false;

    let last_index = collection.len().saturating_sub(1);

    for (idx, record) in collection.iter().enumerate() {
        // Once stopped only the boundary markers are still needed.
        if stopped && idx != 0 && idx != last_index {
            continue;
        }

        let cursor = CursorCodec::encode(key_spec, record);

        if idx == 0 {
            first_boundary_cursor = cursor.clone();
        }
        if idx == last_index {
            last_boundary_cursor = cursor.clone();
        }
        if stopped {
            continue;
        }

        if after.is_some_and(|a| cursor == a) {
            trace!(index = idx, "matched after cursor");
            edges.clear();
        } else if before.is_some_and(|b| cursor == b) {
            trace!(index = idx, "matched before cursor");
            stopped = true;
        } else {
            edges.push(Edge::new(record, cursor));
        }
    }

    debug!(
        connection = %key_spec.name,
        total = collection.len(),
        in_range = edges.len(),
        "extracted window"
    );

    Window {
        edges,
        first_boundary_cursor,
        last_boundary_cursor,
    }
}
