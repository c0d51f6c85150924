//! Unit tests for the in-memory token cache

use std::time::Duration;

use crate::cache::MemoryTokenCache;
use reel_core::services::token::TokenCache;

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let cache = MemoryTokenCache::new();
    cache
        .set("TOKEN_abc", "payload", Duration::from_millis(5_000))
        .await
        .unwrap();

    assert_eq!(cache.get("TOKEN_abc").await.unwrap().as_deref(), Some("payload"));

    tokio::time::advance(Duration::from_millis(4_999)).await;
    assert!(cache.get("TOKEN_abc").await.unwrap().is_some());

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(cache.get("TOKEN_abc").await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_purge_expired() {
    let cache = MemoryTokenCache::new();
    cache.set("a", "1", Duration::from_secs(1)).await.unwrap();
    cache.set("b", "2", Duration::from_secs(10)).await.unwrap();

    tokio::time::advance(Duration::from_secs(2)).await;

    assert_eq!(cache.purge_expired().await, 1);
    assert_eq!(cache.len().await, 1);
    assert_eq!(
        cache.remaining_ttl("b").await,
        Some(Duration::from_secs(8))
    );
}

#[tokio::test]
async fn test_overwrite_and_delete() {
    let cache = MemoryTokenCache::new();
    cache.set("k", "old", Duration::from_secs(60)).await.unwrap();
    cache.set("k", "new", Duration::from_secs(60)).await.unwrap();

    assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("new"));

    cache.delete("k").await.unwrap();
    assert!(cache.get("k").await.unwrap().is_none());
    assert!(cache.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_set_leaves_expired_entries_to_purge() {
    let cache = MemoryTokenCache::new();
    cache.set("old", "1", Duration::from_secs(1)).await.unwrap();

    tokio::time::advance(Duration::from_secs(2)).await;
    cache.set("fresh", "2", Duration::from_secs(10)).await.unwrap();

    assert_eq!(cache.len().await, 2);
    assert!(cache.get("old").await.unwrap().is_none());
    assert_eq!(cache.purge_expired().await, 1);
    assert_eq!(cache.len().await, 1);
}
