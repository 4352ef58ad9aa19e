//! Cache Provider Module
//!
//! Key-value cache backends with per-entry expiration, behind the
//! `CacheProvider` trait. The coordinator only ever touches one well-known
//! key holding the serialized task list.

mod cleanup;
mod entry;
mod memory;
mod provider;
mod redis;

// Re-export public types
pub use cleanup::spawn_sweeper_task;
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use provider::CacheProvider;
pub use redis::RedisCache;
