//! Token Lifecycle Manager
//!
//! This module handles all token-related operations including:
//! - Basic and Bearer credential header parsing
//! - JWT access and refresh token issuing and verification
//! - Cache-backed block-list and verified-payload memoization
//! - The incoming-request gate decision

mod config;
mod credentials;
mod service;
mod signer;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::TokenServiceConfig;
pub use credentials::{extract_bearer_token, parse_basic_credential, BasicCredential};
pub use service::{block_key, verified_key, AuthDecision, TokenService};
pub use signer::JwtSigner;
pub use traits::{SecretStore, TokenCache, TokenSigner, VerifyFailure};
