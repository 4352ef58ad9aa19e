//! Response DTOs for the task service API
//!
//! Task records serialize themselves; this module covers the auxiliary
//! endpoints and error bodies.

use serde::Serialize;

use crate::service::StatsSnapshot;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of list reads served from the cache
    pub cache_hits: u64,
    /// Number of list reads rebuilt from the store
    pub cache_misses: u64,
    /// Number of cache invalidations issued by writes
    pub invalidations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a coordinator stats snapshot.
    pub fn new(snapshot: StatsSnapshot) -> Self {
        let total = snapshot.cache_hits + snapshot.cache_misses;
        let hit_rate = if total > 0 {
            snapshot.cache_hits as f64 / total as f64
        } else {
            0.0
        };
        Self {
            cache_hits: snapshot.cache_hits,
            cache_misses: snapshot.cache_misses,
            invalidations: snapshot.invalidations,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
