//! Coordinator Statistics Module
//!
//! Tracks cache-aside effectiveness: list reads served from cache, reads
//! rebuilt from the store, and invalidations issued by writes.

use std::sync::atomic::{AtomicU64, Ordering};

// == Service Stats ==
/// Atomic counters shared by all request handlers.
#[derive(Debug, Default)]
pub struct ServiceStats {
    hits: AtomicU64,
    misses: AtomicU64,
    invalidations: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// List reads served from the cache
    pub cache_hits: u64,
    /// List reads rebuilt from the store
    pub cache_misses: u64,
    /// Cache invalidations issued by writes
    pub invalidations: u64,
}

impl ServiceStats {
    // == Constructor ==
    /// Creates a new ServiceStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Invalidation ==
    /// Increments the invalidation counter.
    pub fn record_invalidation(&self) {
        self.invalidations.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns a point-in-time copy of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            cache_hits: self.hits.load(Ordering::Relaxed),
            cache_misses: self.misses.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = ServiceStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_counters_accumulate() {
        let stats = ServiceStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_invalidation();

        let snap = stats.snapshot();
        assert_eq!(snap.cache_hits, 2);
        assert_eq!(snap.cache_misses, 1);
        assert_eq!(snap.invalidations, 1);
    }
}
