//! Error types for credentials, tokens and pagination
//!
//! HTTP status mapping happens in the presentation layer; these enums only
//! carry enough context to pick a status and render a message.

use thiserror::Error;

/// Credential and account errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Header shape, scheme word or token type did not match what the call expects
    #[error("Malformed credential: {reason}")]
    MalformedCredential { reason: String },

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid login credentials")]
    InvalidLogin,
}

impl AuthError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        AuthError::MalformedCredential {
            reason: reason.into(),
        }
    }
}

/// Token verification and lifecycle errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Token expired")]
    TokenExpired,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        TokenError::Unauthorized {
            reason: reason.into(),
        }
    }
}

/// Cursor and ordering errors
#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Malformed cursor: {reason}")]
    MalformedCursor { reason: String },

    #[error("Order direction must be ASC or DESC: {token}")]
    InvalidOrderDirection { token: String },

    #[error("Invalid order column: {token}")]
    InvalidOrderColumn { token: String },
}

impl PaginationError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        PaginationError::MalformedCursor {
            reason: reason.into(),
        }
    }
}
