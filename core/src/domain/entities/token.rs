//! Token entities for JWT-based authentication.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::user::{Principal, Role};

/// Kind of a signed token; drives secret selection and lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }

    /// Token type requested by an `expect_refresh` flag
    pub fn from_refresh_flag(is_refresh: bool) -> Self {
        if is_refresh {
            TokenType::Refresh
        } else {
            TokenType::Access
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenType::Access),
            "refresh" => Ok(TokenType::Refresh),
            other => Err(format!("unknown token type: {}", other)),
        }
    }
}

/// Claims carried by access and refresh tokens
///
/// `token_type` is kept as the raw string so that a token signed with an
/// unknown type still decodes and can be rejected explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject (user ID)
    pub sub: i64,

    pub role: Role,

    #[serde(rename = "type")]
    pub token_type: String,

    /// Issued at, epoch seconds
    pub iat: i64,

    /// Expiration, epoch seconds
    pub exp: i64,
}

impl TokenPayload {
    /// Builds claims for `principal` valid for `lifetime_seconds` from now
    pub fn new(principal: &Principal, token_type: TokenType, lifetime_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: principal.id,
            role: principal.role,
            token_type: token_type.as_str().to_string(),
            iat: now,
            exp: now + lifetime_seconds,
        }
    }

    /// Parsed token type, `None` when the claim is neither access nor refresh
    pub fn kind(&self) -> Option<TokenType> {
        self.token_type.parse().ok()
    }

    pub fn is_refresh(&self) -> bool {
        self.kind() == Some(TokenType::Refresh)
    }

    pub fn principal(&self) -> Principal {
        Principal {
            id: self.sub,
            role: self.role,
        }
    }

    /// Milliseconds left until `exp` measured against `now_ms`; negative once expired
    pub fn remaining_millis(&self, now_ms: i64) -> i64 {
        self.exp.saturating_mul(1000).saturating_sub(now_ms)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Access and refresh token issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub refresh_token: String,
    pub access_token: String,
}
