//! Conversion of domain errors into HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use reel_core::errors::{AuthError, DomainError, PaginationError, TokenError};
use reel_shared::errors::{error_codes, ErrorResponse};

/// Status code and error code for a domain error
pub fn classify(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::MalformedCredential { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::MALFORMED_CREDENTIAL)
            }
            AuthError::InvalidLogin => (StatusCode::BAD_REQUEST, error_codes::INVALID_LOGIN),
            AuthError::UserAlreadyExists => (StatusCode::CONFLICT, error_codes::CONFLICT),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
            TokenError::Unauthorized { .. } => {
                (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID)
            }
            TokenError::TokenGenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        },
        DomainError::Pagination(pagination_error) => match pagination_error {
            PaginationError::MalformedCursor { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::MALFORMED_CURSOR)
            }
            PaginationError::InvalidOrderDirection { .. }
            | PaginationError::InvalidOrderColumn { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_ORDER)
            }
        },
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = classify(error);

    // Internal details stay in the log
    let message = if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
        "An internal error occurred".to_string()
    } else {
        log::debug!("Client error: {}", error);
        error.to_string()
    };

    let mut body = ErrorResponse::new(code, message);
    match error {
        DomainError::Pagination(PaginationError::InvalidOrderDirection { token })
        | DomainError::Pagination(PaginationError::InvalidOrderColumn { token }) => {
            body = body.add_detail("token", token);
        }
        _ => {}
    }

    HttpResponse::build(status).json(body)
}
