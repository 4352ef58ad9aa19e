//! Cache Provider Trait
//!
//! The minimal key-value capability surface the coordinator needs.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Key-value store with per-entry expiration.
///
/// A miss is `Ok(None)`, never an error; errors mean the provider itself
/// failed. `delete` is idempotent: deleting an absent key succeeds.
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Retrieves the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()>;

    /// Removes `key`. Absent keys are not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
