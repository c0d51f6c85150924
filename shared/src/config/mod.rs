//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT secrets, token lifetimes, password hashing cost
//! - `cache` - Token cache backend (Redis or in-memory)
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `pagination` - Page size bounds and default ordering
//! - `server` - HTTP server bind settings

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod pagination;
pub mod server;

pub use auth::{AuthConfig, JwtConfig};
pub use cache::{CacheConfig, CacheType};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use pagination::PaginationConfig;
pub use server::ServerConfig;
