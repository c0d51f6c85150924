//! Redis-backed token cache

use async_trait::async_trait;
use std::time::Duration;

use reel_core::services::token::TokenCache;

use super::redis_client::RedisClient;

/// [`TokenCache`] over Redis, namespacing keys with the configured prefix
#[derive(Clone)]
pub struct RedisTokenCache {
    client: RedisClient,
    key_prefix: Option<String>,
}

impl RedisTokenCache {
    pub fn new(client: RedisClient) -> Self {
        let key_prefix = client.config().key_prefix.clone();
        Self { client, key_prefix }
    }

    pub fn client(&self) -> &RedisClient {
        &self.client
    }

    fn key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

#[async_trait]
impl TokenCache for RedisTokenCache {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client
            .get(&self.key(key))
            .await
            .map_err(|e| e.to_string())
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String> {
        self.client
            .set_with_expiry(&self.key(key), value, ttl)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        self.client
            .delete(&self.key(key))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
