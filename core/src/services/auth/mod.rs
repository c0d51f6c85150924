//! Authentication service module
//!
//! Registration and login over Basic credentials, with bcrypt password
//! hashing and token pairs issued through the token service.

mod config;
mod service;


pub use config::AuthServiceConfig;
pub use service::AuthService;
