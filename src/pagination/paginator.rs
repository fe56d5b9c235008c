//! Relay paginator
//!
//! Applies `first`/`last` to an extracted window and derives page info by
//! comparing the window's ends against the boundaries of the full
//! collection, so the flags answer "is there more data beyond this page"
//! rather than "did truncation drop something".

use super::types::{Connection, PageInfo, PaginationArgs};
use crate::cursor::{CursorCodec, KeySpec};
use crate::error::Result;
use crate::types::Record;
use crate::window::{extract, Window};
use tracing::{debug, warn};

/// Paginate an ordered collection
///
/// Never fails: unknown cursors filter nothing and zero limits truncate
/// nothing. The collection is borrowed, never sorted or modified.
pub fn paginate<'a, R: Record>(
    collection: &'a [R],
    key_spec: &KeySpec,
    args: &PaginationArgs,
) -> Connection<&'a R> {
    let Window {
        mut edges,
        first_boundary_cursor,
        last_boundary_cursor,
    } = extract(collection, key_spec, args.after_cursor(), args.before_cursor());

    if let Some(first) = args.first_limit() {
        edges.truncate(first);
    }

    if let Some(last) = args.last_limit() {
        if edges.len() > last {
            let excess = edges.len() - last;
            edges.drain(..excess);
        }
    }

    let has_previous_page = edges
        .first()
        .is_some_and(|edge| edge.cursor != first_boundary_cursor);
    let has_next_page = edges
        .last()
        .is_some_and(|edge| edge.cursor != last_boundary_cursor);

    let page_info = PageInfo {
        has_next_page,
        has_previous_page,
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
    };

    debug!(
        connection = %key_spec.name,
        edges = edges.len(),
        has_next_page,
        has_previous_page,
        "paginated collection"
    );

    Connection { edges, page_info }
}

/// Paginator with optional strict cursor checking
///
/// In lenient mode (the default) this is exactly [`paginate`]. In strict
/// mode `after`/`before` must decode and belong to the key specification's
/// namespace, otherwise the call fails with `MalformedCursor` instead of
/// silently returning an unfiltered window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    /// Reject undecodable or foreign cursors
    pub strict_cursors: bool,
}

impl Paginator {
    /// Create a lenient paginator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator that rejects malformed cursors
    pub fn strict() -> Self {
        Self {
            strict_cursors: true,
        }
    }

    /// Set strict cursor checking
    #[must_use]
    pub fn with_strict_cursors(mut self, strict: bool) -> Self {
        self.strict_cursors = strict;
        self
    }

    /// Paginate an ordered collection
    pub fn paginate<'a, R: Record>(
        &self,
        collection: &'a [R],
        key_spec: &KeySpec,
        args: &PaginationArgs,
    ) -> Result<Connection<&'a R>> {
        if self.strict_cursors {
            let cursors = [
                ("after", args.after_cursor()),
                ("before", args.before_cursor()),
            ];
            for (argument, cursor) in cursors {
                if let Some(cursor) = cursor {
                    CursorCodec::validate(key_spec, cursor).inspect_err(|e| {
                        warn!(argument, connection = %key_spec.name, error = %e, "rejected cursor");
                    })?;
                }
            }
        }

        Ok(paginate(collection, key_spec, args))
    }
}
