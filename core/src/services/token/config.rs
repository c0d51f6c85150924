//! Configuration for the token service

use reel_shared::config::JwtConfig;

/// Lifetimes used by the token service, all in seconds
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token lifetime
    pub access_token_expiry: i64,
    /// Refresh token lifetime
    pub refresh_token_expiry: i64,
    /// How long before token expiry a verified-payload cache entry must lapse
    pub verified_cache_margin: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_token_expiry: 300,
            refresh_token_expiry: 24 * 60 * 60,
            verified_cache_margin: 30,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            access_token_expiry: jwt.access_token_expiry,
            refresh_token_expiry: jwt.refresh_token_expiry,
            verified_cache_margin: jwt.verified_cache_margin,
        }
    }
}
