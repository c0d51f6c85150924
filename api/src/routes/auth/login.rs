use actix_web::{web, HttpRequest, HttpResponse};

use reel_core::repositories::{MovieRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::routes::required_authorization;

/// Handler for POST /api/v1/auth/login
///
/// Exchanges `Authorization: Basic base64(email:password)` for a token pair.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "refreshToken": "eyJ...",
///     "accessToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed credential, unknown email or wrong password
pub async fn login<U, M>(req: HttpRequest, state: web::Data<AppState<U, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MovieRepository + 'static,
{
    let header = match required_authorization(&req) {
        Ok(header) => header,
        Err(error) => return handle_domain_error(&error),
    };

    match state.auth_service.login(header).await {
        Ok(tokens) => HttpResponse::Ok().json(tokens),
        Err(error) => handle_domain_error(&error),
    }
}
