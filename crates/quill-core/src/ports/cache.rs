use async_trait::async_trait;
use std::time::Duration;

/// Cache trait - abstraction over read-through caching backends.
///
/// A cache is best-effort: writes never fail, a lost entry is only a miss.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a value from the cache.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value in the cache with optional TTL.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>);

    /// Delete a key from the cache.
    async fn delete(&self, key: &str);

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> bool;

    /// Drop every entry. Called after any successful store mutation.
    async fn clear(&self);
}
