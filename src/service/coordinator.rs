//! Cache-Aside Coordinator
//!
//! Ties the record store and the cache provider together: reads are served
//! from the cache when possible and rebuilt from the store on a miss, and
//! every successful mutation invalidates the cached list.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::cache::CacheProvider;
use crate::error::{Result, ServiceError};
use crate::models::{Task, TaskId};
use crate::service::{ServiceStats, StatsSnapshot, TASK_LIST_KEY};
use crate::store::{NewTask, TaskPatch, TaskStore};

// == Task Service ==
/// Coordinates the authoritative store and the cache the read path consults.
///
/// The store lock and the cache are never held together: store operations
/// complete entirely in memory before any cache I/O starts. Between a
/// mutation committing and its invalidation landing, a concurrent reader can
/// still observe (or repopulate) a stale list entry; that window is accepted
/// and bounded by the TTL.
pub struct TaskService {
    store: TaskStore,
    cache: Arc<dyn CacheProvider>,
    ttl: Duration,
    stats: ServiceStats,
}

impl TaskService {
    // == Constructor ==
    /// Creates a coordinator over the given store and cache backend.
    pub fn new(store: TaskStore, cache: Arc<dyn CacheProvider>, ttl: Duration) -> Self {
        Self {
            store,
            cache,
            ttl,
            stats: ServiceStats::new(),
        }
    }

    /// Parses a path-supplied identifier under the store's active policy.
    pub fn parse_id(&self, raw: &str) -> Result<TaskId> {
        self.store.policy().parse_id(raw)
    }

    /// Returns the authoritative record store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns a snapshot of the cache-effectiveness counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // == Read Path ==
    /// Returns the serialized task list, cache-aside.
    ///
    /// A hit returns the cached bytes verbatim; they are already in wire
    /// format and are not re-decoded. A miss snapshots the store, serializes
    /// it, populates the cache, and returns the fresh bytes. A failed
    /// population is logged but does not fail the response; a failed lookup
    /// does, so a degraded cache is never silently hidden from callers.
    pub async fn get_all(&self) -> Result<Vec<u8>> {
        if let Some(cached) = self.cache.get(TASK_LIST_KEY).await? {
            self.stats.record_hit();
            debug!("Task list served from cache");
            return Ok(cached);
        }

        self.stats.record_miss();
        let tasks = self.store.list();
        let bytes = serde_json::to_vec(&tasks)
            .map_err(|err| ServiceError::Internal(format!("serializing task list: {}", err)))?;

        if let Err(err) = self.cache.set(TASK_LIST_KEY, &bytes, self.ttl).await {
            // The response still carries fresh data; only the cache stays
            // empty until the next read. Not retried.
            error!("Failed to populate task list cache: {}", err);
        } else {
            debug!("Task list cache populated ({} tasks)", tasks.len());
        }

        Ok(bytes)
    }

    // == Write Path ==
    /// Creates a record, then invalidates the cached list.
    pub async fn create(&self, candidate: NewTask) -> Result<Task> {
        let task = self.store.create(candidate)?;
        self.invalidate().await;
        Ok(task)
    }

    /// Updates a record, then invalidates the cached list.
    ///
    /// A `NotFound` returns immediately and leaves the cache untouched: a
    /// failed write must not discard valid cached data.
    pub async fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<Task> {
        let task = self.store.update(id, patch)?;
        self.invalidate().await;
        Ok(task)
    }

    /// Deletes a record, then invalidates the cached list.
    pub async fn delete(&self, id: &TaskId) -> Result<()> {
        self.store.delete(id)?;
        self.invalidate().await;
        Ok(())
    }

    /// Drops the cached list so the next read repopulates from the store.
    ///
    /// Invalidation failure is reported, never retried, and never rolls the
    /// store mutation back: the store is the source of truth and the stale
    /// entry dies with its TTL at the latest.
    async fn invalidate(&self) {
        self.stats.record_invalidation();
        if let Err(err) = self.cache.delete(TASK_LIST_KEY).await {
            error!("Cache invalidation failed, stale list bounded by TTL: {}", err);
        }
    }
}
