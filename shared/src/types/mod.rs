//! Type definitions module
//!
//! - `pagination` - Cursor and page-number pagination for list endpoints

pub mod pagination;

pub use pagination::{CursorPageRequest, CursorPaginatedResponse, PagePagination};
