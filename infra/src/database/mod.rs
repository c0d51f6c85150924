//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer including:
//! - Connection pool management
//! - An SQL select builder implementing the ordered-query trait
//! - Repository pattern implementations

pub mod connection;
pub mod mysql;
pub mod select_builder;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlMovieRepository, MySqlUserRepository};
pub use select_builder::{SqlQuery, SqlSelectBuilder};
