//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Page-number pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_take")]
    pub take: u32,
}

impl Default for PagePagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            take: default_take(),
        }
    }
}

impl PagePagination {
    /// Create a new pagination with sanitized values
    pub fn new(page: u32, take: u32) -> Self {
        Self {
            page: page.max(1),
            take: take.clamp(MIN_TAKE, MAX_TAKE),
        }
    }

    /// Number of rows to skip before this page
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1) * self.take
    }
}

/// Cursor pagination request as received on the wire
///
/// `order` entries are `"<column>_ASC"` / `"<column>_DESC"` tokens. When a
/// cursor is present its embedded order wins over this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPageRequest {
    /// Opaque cursor returned by a previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// Ordering tokens, first entry is the primary sort key
    #[serde(default)]
    pub order: Vec<String>,

    /// Page size
    #[serde(default = "default_take")]
    pub take: u32,
}

impl Default for CursorPageRequest {
    fn default() -> Self {
        Self {
            cursor: None,
            order: Vec::new(),
            take: default_take(),
        }
    }
}

impl CursorPageRequest {
    /// Build a first-page request for the given order
    pub fn first<I, S>(order: I, take: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cursor: None,
            order: order.into_iter().map(Into::into).collect(),
            take,
        }
    }

    /// Continue from a cursor
    pub fn after(cursor: impl Into<String>, take: u32) -> Self {
        Self {
            cursor: Some(cursor.into()),
            order: Vec::new(),
            take,
        }
    }
}

/// Response for cursor-based pagination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPaginatedResponse<T> {
    /// The data items
    pub data: Vec<T>,

    /// Cursor for the next page, `null` when this page is empty
    pub next_cursor: Option<String>,

    /// Number of items in this page
    pub count: usize,
}

impl<T> CursorPaginatedResponse<T> {
    /// Create a response, deriving `count` from the data
    pub fn new(data: Vec<T>, next_cursor: Option<String>) -> Self {
        let count = data.len();
        Self {
            data,
            next_cursor,
            count,
        }
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> CursorPaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        CursorPaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            count: self.count,
        }
    }
}

// Constants
const DEFAULT_PAGE: u32 = 1;
const DEFAULT_TAKE: u32 = 10;
const MIN_TAKE: u32 = 1;
const MAX_TAKE: u32 = 100;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_take() -> u32 {
    DEFAULT_TAKE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_pagination_offset() {
        assert_eq!(PagePagination::new(1, 10).offset(), 0);
        assert_eq!(PagePagination::new(3, 10).offset(), 20);
        assert_eq!(PagePagination::new(0, 500).take, MAX_TAKE);
    }

    #[test]
    fn test_cursor_request_defaults_from_json() {
        let request: CursorPageRequest = serde_json::from_str("{}").unwrap();
        assert!(request.cursor.is_none());
        assert!(request.order.is_empty());
        assert_eq!(request.take, DEFAULT_TAKE);
    }

    #[test]
    fn test_cursor_response_serializes_null_cursor() {
        let response: CursorPaginatedResponse<u32> = CursorPaginatedResponse::new(vec![], None);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["nextCursor"].is_null());
        assert_eq!(json["count"], 0);
    }
}
