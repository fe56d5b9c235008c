//! Pagination module
//!
//! Relay connection pagination: `first`/`after`/`last`/`before` over an
//! ordered in-memory collection.
//!
//! # Overview
//!
//! [`paginate`] extracts the window between `after` and `before`, truncates
//! it with `first` then `last`, and computes `hasNextPage` /
//! `hasPreviousPage` against the first and last record of the *whole*
//! collection. [`Paginator`] wraps the same algorithm with optional strict
//! cursor checking.

mod paginator;
mod types;

pub use paginator::{paginate, Paginator};
pub use types::{Connection, PageInfo, PaginationArgs};
