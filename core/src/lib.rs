//! # Reel Core
//!
//! Core business logic and domain layer for the Reel backend.
//! This crate contains domain entities, the cursor pagination engine, the
//! token lifecycle manager, business services, repository interfaces and
//! error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{MovieRepository, UserRepository};
pub use services::{
    AuthDecision, AuthService, CursorPage, CursorPaginator, JwtSigner, MovieService,
    OrderedQuery, SecretStore, TokenCache, TokenService, TokenServiceConfig, TokenSigner,
    VerifyFailure,
};
