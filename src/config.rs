//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::store::IdPolicy;

/// Which cache backend the coordinator talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    /// External Redis server (the default; unreachable at startup is fatal)
    Redis,
    /// Process-local TTL map
    Memory,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" => Ok(CacheBackend::Memory),
            other => Err(format!("unknown cache backend: {}", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache backend selection
    pub cache_backend: CacheBackend,
    /// Redis address as a `redis://` URL, without a database path
    pub cache_addr: String,
    /// Redis logical database index
    pub cache_db: u32,
    /// Cache entry TTL in seconds
    pub cache_ttl: u64,
    /// Cache connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Memory-backend sweep interval in seconds
    pub sweep_interval: u64,
    /// Identifier policy for task records
    pub id_policy: IdPolicy,
    /// HTTP server port; 0 asks the OS for a free port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_BACKEND` - "redis" or "memory" (default: redis)
    /// - `CACHE_ADDR` - Redis URL (default: redis://127.0.0.1:6379)
    /// - `CACHE_DB` - Redis logical database (default: 0)
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 600)
    /// - `CACHE_CONNECT_TIMEOUT_MS` - Connection timeout (default: 2000)
    /// - `SWEEP_INTERVAL` - Memory sweep frequency in seconds (default: 60)
    /// - `ID_POLICY` - "server" or "client" (default: server)
    /// - `SERVER_PORT` - HTTP port, 0 for OS-assigned (default: 0)
    pub fn from_env() -> Self {
        Self {
            cache_backend: env::var("CACHE_BACKEND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(CacheBackend::Redis),
            cache_addr: env::var("CACHE_ADDR")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            cache_db: env::var("CACHE_DB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
            connect_timeout_ms: env::var("CACHE_CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            id_policy: env::var("ID_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(IdPolicy::ServerAssigned),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_backend: CacheBackend::Redis,
            cache_addr: "redis://127.0.0.1:6379".to_string(),
            cache_db: 0,
            cache_ttl: 600,
            connect_timeout_ms: 2000,
            sweep_interval: 60,
            id_policy: IdPolicy::ServerAssigned,
            server_port: 0,
        }
    }
}
