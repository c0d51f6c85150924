pub mod auth;
pub mod movies;

use actix_web::{http::header::AUTHORIZATION, HttpRequest};
use reel_core::errors::{AuthError, DomainError};

/// `Authorization` header value, malformed-credential error when absent
pub(crate) fn required_authorization(req: &HttpRequest) -> Result<&str, DomainError> {
    req.headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| AuthError::malformed("missing Authorization header"))?
        .to_str()
        .map_err(|_| AuthError::malformed("Authorization header is not valid text").into())
}
