//! Redis Cache Backend
//!
//! Cache provider backed by an external Redis server. The connection is
//! established once at startup and verified with a PING; a backend that
//! cannot be reached is a configuration error, so startup fails rather than
//! degrading to store-only reads.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::Client;
use tokio::time::timeout;
use tracing::info;

use crate::cache::CacheProvider;
use crate::error::{Result, ServiceError};

// == Redis Cache ==
/// Cache provider speaking to a Redis server over a managed connection.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    // == Constructor ==
    /// Connects to Redis at `addr` (a `redis://` URL without a database
    /// path), selecting logical database `db`, and verifies the connection
    /// with a PING.
    ///
    /// Fails if the handshake does not complete within `connect_timeout`.
    pub async fn connect(addr: &str, db: u32, connect_timeout: Duration) -> Result<Self> {
        let url = format!("{}/{}", addr.trim_end_matches('/'), db);
        let client = Client::open(url.as_str())?;

        let mut conn = match timeout(connect_timeout, client.get_connection_manager()).await {
            Ok(conn) => conn?,
            Err(_) => {
                return Err(ServiceError::Cache(format!(
                    "connection to {} timed out after {}ms",
                    addr,
                    connect_timeout.as_millis()
                )));
            }
        };

        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        info!("Connected to cache backend at {} (db {})", addr, db);

        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheProvider for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl.as_secs())
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        // DEL returns the number of keys removed; zero is a fine answer.
        redis::cmd("DEL")
            .arg(key)
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }
}
