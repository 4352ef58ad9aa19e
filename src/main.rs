//! Task Cache - A task record service with cache-aside reads
//!
//! CRUD over an authoritative in-memory task store, fronted by a
//! TTL-limited, write-invalidated cache of the serialized task list.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use task_cache::api::{create_router, AppState};
use task_cache::cache::{spawn_sweeper_task, CacheProvider, MemoryCache, RedisCache};
use task_cache::config::{CacheBackend, Config};
use task_cache::service::TaskService;
use task_cache::store::TaskStore;

/// Main entry point for the task service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the cache backend (unreachable backend aborts startup)
/// 4. Build the store and cache-aside coordinator
/// 5. Create Axum router with all endpoints
/// 6. Bind the configured (or OS-assigned) port and serve
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Task Cache Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: backend={:?}, ttl={}s, id_policy={:?}, port={}",
        config.cache_backend, config.cache_ttl, config.id_policy, config.server_port
    );

    // Initialize the cache backend. A backend that cannot be reached is a
    // configuration error, not a runtime-degradable condition.
    let (cache, sweeper_handle): (Arc<dyn CacheProvider>, Option<JoinHandle<()>>) =
        match config.cache_backend {
            CacheBackend::Redis => {
                let cache = RedisCache::connect(
                    &config.cache_addr,
                    config.cache_db,
                    Duration::from_millis(config.connect_timeout_ms),
                )
                .await
                .with_context(|| format!("cache backend unreachable at {}", config.cache_addr))?;
                (Arc::new(cache), None)
            }
            CacheBackend::Memory => {
                let cache = Arc::new(MemoryCache::new());
                let handle = spawn_sweeper_task(cache.clone(), config.sweep_interval);
                info!("Background sweeper task started");
                (cache, Some(handle))
            }
        };

    // Build the coordinator over the authoritative store
    let store = TaskStore::new(config.id_policy);
    let service = Arc::new(TaskService::new(
        store,
        cache,
        Duration::from_secs(config.cache_ttl),
    ));

    // Create router with all endpoints
    let app = create_router(AppState::new(service));

    // Bind to the configured port; port 0 lets the OS pick a free one
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweeper_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweeper task (if any) and allows graceful
/// shutdown.
async fn shutdown_signal(sweeper_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = sweeper_handle {
        handle.abort();
        warn!("Sweeper task aborted");
    }
}
