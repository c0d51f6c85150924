//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_ACCESS_SECRET: &str = "access-secret-change-in-production";
const DEFAULT_REFRESH_SECRET: &str = "refresh-secret-change-in-production";

/// JWT authentication configuration
///
/// Access and refresh tokens are signed with distinct secrets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used to sign access tokens
    pub access_token_secret: String,

    /// Secret used to sign refresh tokens
    pub refresh_token_secret: String,

    /// Access token expiry time in seconds
    #[serde(default = "default_access_expiry")]
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    #[serde(default = "default_refresh_expiry")]
    pub refresh_token_expiry: i64,

    /// Seconds subtracted from a token's remaining lifetime when memoizing
    /// its verified payload
    #[serde(default = "default_verified_cache_margin")]
    pub verified_cache_margin: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_token_secret: String::from(DEFAULT_ACCESS_SECRET),
            refresh_token_secret: String::from(DEFAULT_REFRESH_SECRET),
            access_token_expiry: default_access_expiry(),
            refresh_token_expiry: default_refresh_expiry(),
            verified_cache_margin: default_verified_cache_margin(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with both secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_token_secret: access_secret.into(),
            refresh_token_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token expiry in hours
    pub fn with_refresh_expiry_hours(mut self, hours: i64) -> Self {
        self.refresh_token_expiry = hours * 3600;
        self
    }

    /// Check if either secret is still the built-in default (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.access_token_secret == DEFAULT_ACCESS_SECRET
            || self.refresh_token_secret == DEFAULT_REFRESH_SECRET
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            access_token_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or(defaults.access_token_secret),
            refresh_token_secret: std::env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or(defaults.refresh_token_secret),
            access_token_expiry: std::env::var("ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
            verified_cache_margin: defaults.verified_cache_margin,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt cost used when hashing passwords
    #[serde(default = "default_hash_rounds")]
    pub hash_rounds: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            hash_rounds: default_hash_rounds(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            hash_rounds: std::env::var("HASH_ROUNDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_hash_rounds),
        }
    }
}

fn default_access_expiry() -> i64 {
    300 // 5 minutes
}

fn default_refresh_expiry() -> i64 {
    86400 // 24 hours
}

fn default_verified_cache_margin() -> i64 {
    30
}

fn default_hash_rounds() -> u32 {
    10
}
