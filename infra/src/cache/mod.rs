//! Cache module
//!
//! Redis client with retry logic plus the two [`TokenCache`] stores used by
//! the token service: Redis for deployments and an in-process map for
//! development and tests.
//!
//! [`TokenCache`]: reel_core::services::token::TokenCache

pub mod memory_cache;
pub mod redis_client;
pub mod token_cache;

#[cfg(test)]
mod tests;

pub use memory_cache::MemoryTokenCache;
pub use redis_client::RedisClient;
pub use token_cache::RedisTokenCache;

// Re-export commonly used types
pub use reel_shared::config::CacheConfig;
