//! Tests for the incoming-request gate decision

use chrono::Utc;
use std::time::Duration;

use super::mocks::{bearer, create_test_service, RecordingCache, ACCESS_SECRET};
use crate::domain::entities::token::TokenPayload;
use crate::domain::entities::user::{Principal, Role};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::services::token::{
    block_key, verified_key, AuthDecision, JwtSigner, TokenService, TokenSigner,
};
use reel_shared::config::JwtConfig;

fn user() -> Principal {
    Principal {
        id: 1,
        role: Role::User,
    }
}

fn signed(token_type: &str, lifetime: i64, secret: &str) -> String {
    let now = Utc::now().timestamp();
    let payload = TokenPayload {
        sub: 1,
        role: Role::User,
        token_type: token_type.to_string(),
        iat: now,
        exp: now + lifetime,
    };
    JwtSigner::new().sign(&payload, secret).unwrap()
}

#[tokio::test]
async fn test_missing_header_is_anonymous() {
    let (service, cache) = create_test_service();

    assert_eq!(service.authenticate(None).await.unwrap(), AuthDecision::Anonymous);
    assert!(cache.writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_header_is_rejected() {
    let (service, _) = create_test_service();

    assert!(matches!(
        service.authenticate(Some("Token abc")).await,
        Err(DomainError::Auth(AuthError::MalformedCredential { .. }))
    ));
}

#[tokio::test]
async fn test_verified_token_is_cached_with_margin() {
    let (service, cache) = create_test_service();
    let token = service.issue_token(&user(), false).unwrap();

    let decision = service.authenticate(Some(&bearer(&token))).await.unwrap();
    assert_eq!(decision.payload().unwrap().sub, 1);

    let ttl = cache.ttl_of(&verified_key(&token)).unwrap();
    assert!(ttl > Duration::from_secs(268), "ttl was {:?}", ttl);
    assert!(ttl <= Duration::from_secs(270), "ttl was {:?}", ttl);
}

#[tokio::test]
async fn test_refresh_token_verified_with_refresh_secret() {
    let (service, _) = create_test_service();
    let token = service.issue_token(&user(), true).unwrap();

    let decision = service.authenticate(Some(&bearer(&token))).await.unwrap();
    assert!(decision.payload().unwrap().is_refresh());
}

#[tokio::test]
async fn test_cache_ttl_never_below_one_second() {
    let (service, cache) = create_test_service();
    let token = signed("access", 10, ACCESS_SECRET);

    service.authenticate(Some(&bearer(&token))).await.unwrap();

    assert_eq!(
        cache.ttl_of(&verified_key(&token)),
        Some(Duration::from_secs(1))
    );
}

#[tokio::test]
async fn test_cached_payload_skips_verification() {
    let (service, cache) = create_test_service();
    let token = signed("access", 300, "some-other-secret");
    let payload = JwtSigner::new().decode(&token).unwrap();
    cache.insert(&verified_key(&token), &serde_json::to_string(&payload).unwrap());

    let decision = service.authenticate(Some(&bearer(&token))).await.unwrap();
    assert_eq!(decision, AuthDecision::Authenticated(payload));
}

#[tokio::test]
async fn test_block_precedes_verified_cache() {
    let (service, _) = create_test_service();
    let token = service.issue_token(&user(), false).unwrap();
    let header = bearer(&token);

    assert!(service.authenticate(Some(&header)).await.unwrap().payload().is_some());
    assert!(service.block_token(&token).await.unwrap());

    assert!(matches!(
        service.authenticate(Some(&header)).await,
        Err(DomainError::Token(TokenError::Unauthorized { .. }))
    ));
}

#[tokio::test]
async fn test_unknown_token_type_is_rejected() {
    let (service, _) = create_test_service();
    let token = signed("session", 300, ACCESS_SECRET);

    assert!(matches!(
        service.authenticate(Some(&bearer(&token))).await,
        Err(DomainError::Token(TokenError::Unauthorized { .. }))
    ));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let (service, _) = create_test_service();
    let token = signed("access", -60, ACCESS_SECRET);

    assert!(matches!(
        service.authenticate(Some(&bearer(&token))).await,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[tokio::test]
async fn test_bad_signature_passes_through_anonymous() {
    let (service, cache) = create_test_service();
    let token = signed("refresh", 300, ACCESS_SECRET);

    let decision = service.authenticate(Some(&bearer(&token))).await.unwrap();

    assert_eq!(decision, AuthDecision::Anonymous);
    assert!(!cache.contains(&verified_key(&token)));
}

#[tokio::test]
async fn test_cache_failure_is_internal_error() {
    let service = TokenService::new(RecordingCache::failing(), &JwtConfig::default());

    assert!(matches!(
        service.authenticate(Some("Bearer abc")).await,
        Err(DomainError::Internal { .. })
    ));
}

#[tokio::test]
async fn test_blocked_key_namespace() {
    let (service, cache) = create_test_service();
    let token = service.issue_token(&user(), false).unwrap();

    service.block_token(&token).await.unwrap();

    assert!(cache.contains(&format!("BLOCK_TOKEN_{}", token)));
    assert_eq!(block_key("abc"), "BLOCK_TOKEN_abc");
    assert_eq!(verified_key("abc"), "TOKEN_abc");
}
