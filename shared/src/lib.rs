//! Shared utilities and common types for the Reel server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Pagination request/response types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AuthConfig, CacheConfig, CacheType, DatabaseConfig, Environment, JwtConfig, PaginationConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{CursorPageRequest, CursorPaginatedResponse, PagePagination};
