//! Application state and route table

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use reel_core::repositories::{MovieRepository, UserRepository};
use reel_core::services::auth::AuthService;
use reel_core::services::movie::MovieService;
use reel_core::services::token::{TokenCache, TokenService};

use crate::middleware::auth::BearerGate;
use crate::routes::{auth, movies};

/// Cache shared by the block-list and the verified-payload cache
pub type SharedCache = Arc<dyn TokenCache>;

/// Application state that holds shared services
pub struct AppState<U, M>
where
    U: UserRepository,
    M: MovieRepository,
{
    pub auth_service: Arc<AuthService<U, SharedCache>>,
    pub movie_service: Arc<MovieService<M>>,
}

impl<U, M> AppState<U, M>
where
    U: UserRepository + 'static,
    M: MovieRepository + 'static,
{
    pub fn new(
        auth_service: Arc<AuthService<U, SharedCache>>,
        movie_service: Arc<MovieService<M>>,
    ) -> Self {
        Self {
            auth_service,
            movie_service,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService<SharedCache>> {
        self.auth_service.token_service()
    }

    /// Gate middleware backed by this state's token service
    pub fn bearer_gate(&self) -> BearerGate {
        BearerGate::new(self.token_service().clone())
    }
}

/// Registers every route; register and login sit outside the bearer gate
pub fn configure_app<U, M>(cfg: &mut web::ServiceConfig, state: web::Data<AppState<U, M>>)
where
    U: UserRepository + 'static,
    M: MovieRepository + 'static,
{
    let gate = state.bearer_gate();

    cfg.app_data(state)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, M>))
                        .route("/login", web::post().to(auth::login::<U, M>))
                        .service(
                            web::scope("/token")
                                .wrap(gate.clone())
                                .route("/access", web::post().to(auth::access_token::<U, M>))
                                .route("/block", web::post().to(auth::block_token::<U, M>)),
                        )
                        .service(
                            web::resource("/private")
                                .wrap(gate.clone())
                                .route(web::get().to(auth::private)),
                        ),
                )
                .service(
                    web::scope("/movies")
                        .wrap(gate)
                        .route("", web::get().to(movies::list_movies::<U, M>)),
                ),
        );
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "reel-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(reel_shared::errors::ErrorResponse::new(
        reel_shared::errors::error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
