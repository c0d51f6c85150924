//! Collaborator traits for the token service

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::token::{TokenPayload, TokenType};
use crate::errors::TokenError;
use reel_shared::config::JwtConfig;

/// Key-value store backing the block-list and the verified-payload cache
///
/// Entries expire after the given TTL; expiry is enforced by the store.
#[async_trait]
pub trait TokenCache: Send + Sync {
    /// Read a live entry
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    /// Store an entry that lapses after `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String>;
    /// Remove an entry if present
    async fn delete(&self, key: &str) -> Result<(), String>;
}

#[async_trait]
impl<T: TokenCache + ?Sized> TokenCache for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String> {
        (**self).set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        (**self).delete(key).await
    }
}

/// Reason a signature check rejected a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyFailure {
    /// Signature is valid but `exp` has passed
    Expired,
    /// Bad signature, malformed token or missing claims
    Invalid(String),
}

/// Signing and verification primitive
pub trait TokenSigner: Send + Sync {
    fn sign(&self, payload: &TokenPayload, secret: &str) -> Result<String, TokenError>;

    /// Checks signature and expiry
    fn verify(&self, token: &str, secret: &str) -> Result<TokenPayload, VerifyFailure>;

    /// Reads the claims without checking signature or expiry
    fn decode(&self, token: &str) -> Result<TokenPayload, TokenError>;
}

/// Source of the signing secret for each token type
pub trait SecretStore: Send + Sync {
    fn secret(&self, kind: TokenType) -> String;
}

impl SecretStore for JwtConfig {
    fn secret(&self, kind: TokenType) -> String {
        match kind {
            TokenType::Access => self.access_token_secret.clone(),
            TokenType::Refresh => self.refresh_token_secret.clone(),
        }
    }
}
