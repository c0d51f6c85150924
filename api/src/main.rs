use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn};

use reel_api::app::{configure_app, not_found, AppState, SharedCache};
use reel_api::config::Config;
use reel_api::middleware::cors::create_cors;
use reel_core::services::auth::{AuthService, AuthServiceConfig};
use reel_core::services::movie::MovieService;
use reel_core::services::pagination::CursorPaginator;
use reel_core::services::token::TokenService;
use reel_infra::cache::{MemoryTokenCache, RedisClient, RedisTokenCache};
use reel_infra::database::{DatabasePool, MySqlMovieRepository, MySqlUserRepository};
use reel_shared::config::CacheType;

const MEMORY_CACHE_PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Reel API Server");

    let config = Config::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("Using built-in JWT secrets; set ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET");
    }

    let cache = create_cache(&config).await?;

    let database = DatabasePool::new(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    match database.health_check().await {
        Ok(true) => info!("Database connection verified"),
        Ok(false) => warn!("Database health check returned an unexpected result"),
        Err(e) => warn!("Database health check failed: {}", e),
    }
    let pool = database.get_pool().clone();

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let movie_repository = Arc::new(MySqlMovieRepository::new(
        pool,
        CursorPaginator::new(config.pagination.clone()),
    ));

    let token_service = Arc::new(TokenService::new(cache, &config.auth.jwt));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service,
        AuthServiceConfig::from(&config.auth),
    ));
    let movie_service = Arc::new(MovieService::new(
        movie_repository,
        config.pagination.clone(),
    ));

    let state = web::Data::new(AppState::new(auth_service, movie_service));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    let mut server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(create_cors(environment))
            .wrap(Logger::default())
            .configure(move |cfg| configure_app(cfg, state))
            .default_service(web::route().to(not_found))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    database.close().await;
    result
}

/// Builds the token cache selected by `CACHE_TYPE`
async fn create_cache(config: &Config) -> io::Result<SharedCache> {
    match config.cache.cache_type {
        CacheType::Redis => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            info!("Using Redis token cache");
            Ok(Arc::new(RedisTokenCache::new(client)))
        }
        CacheType::Memory => {
            if config.is_production() {
                warn!("In-memory token cache in production; blocked tokens are per-process");
            }
            let cache = MemoryTokenCache::new();
            spawn_purge_task(cache.clone());
            info!("Using in-memory token cache");
            Ok(Arc::new(cache))
        }
    }
}

/// Evicts expired in-memory entries in the background
fn spawn_purge_task(cache: MemoryTokenCache) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(MEMORY_CACHE_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = cache.purge_expired().await;
            if purged > 0 {
                log::debug!("Purged {} expired cache entries", purged);
            }
        }
    });
}
