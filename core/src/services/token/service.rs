//! Main token service implementation

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::token::{TokenPair, TokenPayload, TokenType};
use crate::domain::entities::user::Principal;
use crate::errors::{AuthError, DomainError, TokenError};
use reel_shared::config::JwtConfig;

use super::config::TokenServiceConfig;
use super::credentials::extract_bearer_token;
use super::signer::JwtSigner;
use super::traits::{SecretStore, TokenCache, TokenSigner, VerifyFailure};

const BLOCK_KEY_PREFIX: &str = "BLOCK_TOKEN_";
const VERIFIED_KEY_PREFIX: &str = "TOKEN_";

/// Block-list key for a raw token
pub fn block_key(token: &str) -> String {
    format!("{}{}", BLOCK_KEY_PREFIX, token)
}

/// Verified-payload cache key for a raw token
pub fn verified_key(token: &str) -> String {
    format!("{}{}", VERIFIED_KEY_PREFIX, token)
}

/// First characters of the signature segment, safe to log
pub(crate) fn fingerprint(token: &str) -> &str {
    let signature = token.rsplit('.').next().unwrap_or(token);
    signature.get(..8).unwrap_or("")
}

/// Outcome of the incoming-request gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// No credential, or a credential that failed verification for a reason other than expiry
    Anonymous,
    Authenticated(TokenPayload),
}

impl AuthDecision {
    pub fn payload(&self) -> Option<&TokenPayload> {
        match self {
            AuthDecision::Anonymous => None,
            AuthDecision::Authenticated(payload) => Some(payload),
        }
    }
}

/// Service issuing, verifying and blocking JWTs
pub struct TokenService<C: TokenCache, S: TokenSigner = JwtSigner> {
    cache: C,
    signer: S,
    secrets: Arc<dyn SecretStore>,
    config: TokenServiceConfig,
}

impl<C: TokenCache> TokenService<C, JwtSigner> {
    /// Creates a token service signing with HS256 and the secrets of `jwt`
    pub fn new(cache: C, jwt: &JwtConfig) -> Self {
        Self::with_parts(
            cache,
            JwtSigner::new(),
            Arc::new(jwt.clone()),
            TokenServiceConfig::from(jwt),
        )
    }
}

impl<C: TokenCache, S: TokenSigner> TokenService<C, S> {
    pub fn with_parts(
        cache: C,
        signer: S,
        secrets: Arc<dyn SecretStore>,
        config: TokenServiceConfig,
    ) -> Self {
        Self {
            cache,
            signer,
            secrets,
            config,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Parses and verifies a `Bearer <token>` header
    ///
    /// # Arguments
    ///
    /// * `raw_header` - The full `Authorization` header value
    /// * `expect_refresh` - Whether a refresh token is required instead of an access token
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPayload)` - Verified claims of the expected type
    /// * `Err(AuthError::MalformedCredential)` - Bad header shape, scheme, or token type mismatch
    /// * `Err(TokenError)` - Signature invalid or token expired
    pub fn parse_bearer_token(
        &self,
        raw_header: &str,
        expect_refresh: bool,
    ) -> Result<TokenPayload, DomainError> {
        let token = extract_bearer_token(raw_header)?;
        let expected = TokenType::from_refresh_flag(expect_refresh);
        let secret = self.secrets.secret(expected);

        match self.signer.verify(token, &secret) {
            Ok(payload) => {
                ensure_type(&payload, expected)?;
                Ok(payload)
            }
            Err(failure) => {
                // A token of the wrong type is a client mistake even when its signature fails
                if let Ok(decoded) = self.signer.decode(token) {
                    ensure_type(&decoded, expected)?;
                }
                Err(match failure {
                    VerifyFailure::Expired => TokenError::TokenExpired,
                    VerifyFailure::Invalid(reason) => TokenError::unauthorized(reason),
                }
                .into())
            }
        }
    }

    /// Issues a signed access or refresh token for `principal`
    ///
    /// Both secrets are looked up, refresh first, before either is used.
    pub fn issue_token(&self, principal: &Principal, as_refresh: bool) -> Result<String, DomainError> {
        let refresh_secret = self.secrets.secret(TokenType::Refresh);
        let access_secret = self.secrets.secret(TokenType::Access);

        let (token_type, secret, lifetime) = if as_refresh {
            (TokenType::Refresh, refresh_secret, self.config.refresh_token_expiry)
        } else {
            (TokenType::Access, access_secret, self.config.access_token_expiry)
        };

        let payload = TokenPayload::new(principal, token_type, lifetime);
        let token = self.signer.sign(&payload, &secret)?;

        tracing::info!(
            user_id = principal.id,
            token_type = %token_type,
            exp = payload.exp,
            "Issued token"
        );

        Ok(token)
    }

    /// Issues the refresh token then the access token returned on login
    pub fn issue_token_pair(&self, principal: &Principal) -> Result<TokenPair, DomainError> {
        let refresh_token = self.issue_token(principal, true)?;
        let access_token = self.issue_token(principal, false)?;

        Ok(TokenPair {
            refresh_token,
            access_token,
        })
    }

    /// Issues a new access token from a `Bearer <refresh token>` header
    pub fn rotate_access_token(&self, raw_header: &str) -> Result<String, DomainError> {
        let payload = self.parse_bearer_token(raw_header, true)?;
        self.issue_token(&payload.principal(), false)
    }

    /// Adds `token` to the block-list until its own expiry
    ///
    /// The token is decoded without verification; the entry lives for
    /// `max(exp * 1000 - now, 1)` milliseconds. A token whose `exp` lies
    /// beyond the longest lifetime this service issues is rejected.
    pub async fn block_token(&self, token: &str) -> Result<bool, DomainError> {
        let payload = self.signer.decode(token)?;
        let now_ms = now_millis();
        let latest_exp = (now_ms / 1000).saturating_add(self.config.refresh_token_expiry);
        if payload.exp > latest_exp {
            return Err(TokenError::unauthorized("token expiry exceeds issued lifetime").into());
        }
        let ttl_ms = payload.remaining_millis(now_ms).max(1);

        let value = serde_json::to_string(&payload).map_err(DomainError::internal)?;
        self.cache
            .set(&block_key(token), &value, Duration::from_millis(ttl_ms as u64))
            .await
            .map_err(DomainError::internal)?;

        tracing::info!(
            token = fingerprint(token),
            user_id = payload.sub,
            ttl_ms,
            "Blocked token"
        );

        Ok(true)
    }

    /// Decides whether a request is authenticated
    ///
    /// * no header: anonymous
    /// * malformed header: `MalformedCredential`
    /// * blocked token: `Unauthorized`, checked before the verified-payload cache
    /// * cached payload: authenticated without re-verification
    /// * decoded `type` neither access nor refresh: `Unauthorized`
    /// * verified: payload cached for the remaining lifetime minus the margin, authenticated
    /// * expired: `TokenExpired`
    /// * any other verification failure: anonymous
    pub async fn authenticate(&self, raw_header: Option<&str>) -> Result<AuthDecision, DomainError> {
        let Some(raw_header) = raw_header else {
            return Ok(AuthDecision::Anonymous);
        };

        let token = extract_bearer_token(raw_header)?;

        if self.cache_get(&block_key(token)).await?.is_some() {
            tracing::debug!(token = fingerprint(token), "Rejected blocked token");
            return Err(TokenError::unauthorized("token is blocked").into());
        }

        if let Some(cached) = self.cache_get(&verified_key(token)).await? {
            match serde_json::from_str::<TokenPayload>(&cached) {
                Ok(payload) => {
                    tracing::debug!(token = fingerprint(token), "Verified-payload cache hit");
                    return Ok(AuthDecision::Authenticated(payload));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable verified-payload entry");
                }
            }
        }

        let decoded = self.signer.decode(token)?;
        let kind = decoded
            .kind()
            .ok_or_else(|| TokenError::unauthorized("invalid token type"))?;

        match self.signer.verify(token, &self.secrets.secret(kind)) {
            Ok(payload) => {
                self.remember_verified(token, &payload).await;
                Ok(AuthDecision::Authenticated(payload))
            }
            Err(VerifyFailure::Expired) => Err(TokenError::TokenExpired.into()),
            Err(VerifyFailure::Invalid(reason)) => {
                tracing::warn!(
                    token = fingerprint(token),
                    reason = %reason,
                    "Token verification failed, continuing unauthenticated"
                );
                Ok(AuthDecision::Anonymous)
            }
        }
    }

    /// Caches a verified payload so it lapses `verified_cache_margin` seconds before the token
    async fn remember_verified(&self, token: &str, payload: &TokenPayload) {
        let margin_ms = self.config.verified_cache_margin.saturating_mul(1000);
        let ttl_ms = payload
            .remaining_millis(now_millis())
            .saturating_sub(margin_ms)
            .max(1000);

        let value = match serde_json::to_string(payload) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize verified payload");
                return;
            }
        };

        if let Err(e) = self
            .cache
            .set(&verified_key(token), &value, Duration::from_millis(ttl_ms as u64))
            .await
        {
            tracing::warn!(error = %e, "Failed to cache verified payload");
        }
    }

    async fn cache_get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.cache.get(key).await.map_err(|e| {
            tracing::error!(error = %e, "Token cache read failed");
            DomainError::internal(e)
        })
    }
}

fn ensure_type(payload: &TokenPayload, expected: TokenType) -> Result<(), AuthError> {
    if payload.kind() == Some(expected) {
        Ok(())
    } else {
        Err(AuthError::malformed(format!(
            "expected {} token, got {}",
            expected, payload.token_type
        )))
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
