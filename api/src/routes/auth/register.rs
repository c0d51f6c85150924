use actix_web::{web, HttpRequest, HttpResponse};

use reel_core::repositories::{MovieRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::routes::required_authorization;

/// Handler for POST /api/v1/auth/register
///
/// Creates an account from `Authorization: Basic base64(email:password)`.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": 1,
///     "email": "a@b.com",
///     "role": "user",
///     "createdAt": "...",
///     "updatedAt": "..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed Basic credential
/// - 409 Conflict: Email already registered
pub async fn register<U, M>(req: HttpRequest, state: web::Data<AppState<U, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MovieRepository + 'static,
{
    let header = match required_authorization(&req) {
        Ok(header) => header,
        Err(error) => return handle_domain_error(&error),
    };

    match state.auth_service.register(header).await {
        Ok(user) => {
            log::info!("Registered user {}", user.id);
            HttpResponse::Created().json(user)
        }
        Err(error) => handle_domain_error(&error),
    }
}
