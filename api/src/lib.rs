//! HTTP surface for the Reel movie catalog
//!
//! Library exports for the binary and for the integration tests.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{configure_app, AppState, SharedCache};
pub use config::Config;
