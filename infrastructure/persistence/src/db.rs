use redis::aio::MultiplexedConnection;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.invalid_url")]
    InvalidUrl,
    #[error("database.connection_error")]
    ConnectionError,
}

/// Configuration for the Redis connection
pub struct RedisConfig {
    pub url: String,
    /// Upper bound for connecting and for every individual command.
    pub timeout: Duration,
}

impl RedisConfig {
    /// Creates a new Redis configuration with default values
    pub fn new(url: String) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(1),
        }
    }
}

/// Opens a multiplexed connection shared by every request
pub async fn create_redis_connection(
    config: &RedisConfig,
) -> Result<MultiplexedConnection, DatabaseError> {
    let client = redis::Client::open(config.url.as_str()).map_err(|e| {
        tracing::error!(error = %e, "invalid redis url");
        DatabaseError::InvalidUrl
    })?;

    match timeout(config.timeout, client.get_multiplexed_async_connection()).await {
        Ok(Ok(connection)) => Ok(connection),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "redis connection failed");
            Err(DatabaseError::ConnectionError)
        }
        Err(_) => {
            tracing::error!(timeout_ms = config.timeout.as_millis() as u64, "redis connection timed out");
            Err(DatabaseError::ConnectionError)
        }
    }
}
