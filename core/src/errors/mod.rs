//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, PaginationError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

impl DomainError {
    /// Shorthand for an internal error built from any displayable cause
    pub fn internal(message: impl std::fmt::Display) -> Self {
        DomainError::Internal {
            message: message.to_string(),
        }
    }

    /// Whether the caller is at fault (400-class)
    pub fn is_client_error(&self) -> bool {
        match self {
            DomainError::Validation { .. } => true,
            DomainError::Unauthorized { .. } => true,
            DomainError::Auth(_) | DomainError::Pagination(_) => true,
            DomainError::Token(e) => !matches!(e, TokenError::TokenGenerationFailed),
            DomainError::Internal { .. } => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
