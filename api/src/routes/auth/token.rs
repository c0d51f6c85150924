use actix_web::{web, HttpRequest, HttpResponse};

use reel_core::repositories::{MovieRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{AccessTokenResponse, BlockTokenRequest};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::required_authorization;

/// Handler for POST /api/v1/auth/token/access
///
/// Issues a fresh access token from `Authorization: Bearer <refresh token>`.
/// An access token in place of the refresh token is a malformed credential.
pub async fn access_token<U, M>(req: HttpRequest, state: web::Data<AppState<U, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MovieRepository + 'static,
{
    let result = required_authorization(&req)
        .and_then(|header| state.token_service().rotate_access_token(header));

    match result {
        Ok(access_token) => HttpResponse::Ok().json(AccessTokenResponse { access_token }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/v1/auth/token/block
///
/// Adds the token to the block-list until its natural expiry. Responds `true`.
/// Requires an authenticated caller.
pub async fn block_token<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<BlockTokenRequest>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MovieRepository + 'static,
{
    match state.token_service().block_token(&request.token).await {
        Ok(blocked) => {
            log::info!("User {} blocked a token", auth.user_id);
            HttpResponse::Ok().json(blocked)
        }
        Err(error) => handle_domain_error(&error),
    }
}
