use serde::{Deserialize, Serialize};

/// Response for POST /api/v1/auth/token/access
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Request for POST /api/v1/auth/token/block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockTokenRequest {
    /// Raw token, without the `Bearer` scheme
    pub token: String,
}
