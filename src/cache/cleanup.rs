//! TTL Sweeper Task
//!
//! Background task that periodically removes expired entries from the
//! in-memory cache backend. Expired entries already read as misses, so this
//! only reclaims memory; an external backend expires keys on its own.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// Returns a JoinHandle that can be used to abort the task during graceful
/// shutdown.
pub fn spawn_sweeper_task(cache: Arc<MemoryCache>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweeper task with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired().await;
            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
