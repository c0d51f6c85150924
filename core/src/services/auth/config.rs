//! Configuration for the authentication service

use reel_shared::config::AuthConfig;

#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost factor
    pub hash_rounds: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            hash_rounds: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            hash_rounds: config.hash_rounds,
        }
    }
}
