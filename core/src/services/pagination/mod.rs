//! Cursor Pagination Engine
//!
//! Applies ordering, a compound-key boundary predicate and a row limit to any
//! [`OrderedQuery`], and encodes the position of the last returned row into
//! an opaque cursor for the next request.

mod query;
mod service;


pub use query::OrderedQuery;
pub use service::{CursorPage, CursorPaginator};
