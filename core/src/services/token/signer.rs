//! HS256 implementation of [`TokenSigner`]

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::TokenPayload;
use crate::errors::TokenError;

use super::traits::{TokenSigner, VerifyFailure};

/// JWT signer using HMAC-SHA256 with zero expiry leeway
#[derive(Debug, Clone)]
pub struct JwtSigner {
    validation: Validation,
    unverified: Validation,
}

impl JwtSigner {
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        let mut unverified = Validation::new(Algorithm::HS256);
        unverified.insecure_disable_signature_validation();
        unverified.validate_exp = false;
        unverified.validate_aud = false;
        unverified.required_spec_claims.clear();

        Self {
            validation,
            unverified,
        }
    }
}

impl Default for JwtSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, payload: &TokenPayload, secret: &str) -> Result<String, TokenError> {
        encode(
            &Header::new(Algorithm::HS256),
            payload,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            TokenError::TokenGenerationFailed
        })
    }

    fn verify(&self, token: &str, secret: &str) -> Result<TokenPayload, VerifyFailure> {
        decode::<TokenPayload>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &self.validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => VerifyFailure::Expired,
            _ => VerifyFailure::Invalid(e.to_string()),
        })
    }

    fn decode(&self, token: &str) -> Result<TokenPayload, TokenError> {
        decode::<TokenPayload>(token, &DecodingKey::from_secret(&[]), &self.unverified)
            .map(|data| data.claims)
            .map_err(|e| TokenError::unauthorized(format!("undecodable token: {}", e)))
    }
}
