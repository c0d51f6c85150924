use reel_shared::config::{
    AuthConfig, CacheConfig, DatabaseConfig, Environment, PaginationConfig, ServerConfig,
};
use serde::{Deserialize, Serialize};

/// Process configuration assembled from the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub pagination: PaginationConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            server: ServerConfig::from_env(),
            pagination: PaginationConfig::default(),
            environment: Environment::from_env(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}
