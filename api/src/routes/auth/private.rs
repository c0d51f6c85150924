use actix_web::HttpResponse;

use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/auth/private
///
/// Returns the authenticated caller; 401 without a valid bearer token.
pub async fn private(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(auth)
}
