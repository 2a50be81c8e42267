use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, RedisResult};
use tokio::time::timeout;

use business::domain::cart::repository::CartStore;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

/// Cart store backed by one Redis hash per user.
pub struct CartStoreRedis {
    connection: MultiplexedConnection,
    timeout: Duration,
}

impl CartStoreRedis {
    pub fn new(connection: MultiplexedConnection, timeout: Duration) -> Self {
        Self {
            connection,
            timeout,
        }
    }

    /// Runs one command under the configured timeout.
    ///
    /// A timeout only stops waiting for the reply. A command Redis already
    /// received still executes, so an `HSET` reported as unavailable may have
    /// been applied. Callers that retry a mutation re-read the cart first.
    async fn run<T, F>(&self, command: &'static str, fut: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(command, error = %e, "redis command failed");
                Err(RepositoryError::unavailable(e.to_string()))
            }
            Err(_) => {
                tracing::error!(
                    command,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "redis command timed out"
                );
                Err(RepositoryError::unavailable(format!(
                    "redis {} timed out after {}ms",
                    command,
                    self.timeout.as_millis()
                )))
            }
        }
    }
}

#[async_trait]
impl CartStore for CartStoreRedis {
    async fn read_fields(&self, key: &UserId) -> Result<HashMap<String, String>, RepositoryError> {
        let mut conn = self.connection.clone();
        self.run("HGETALL", conn.hgetall(key.as_str())).await
    }

    async fn write_field(
        &self,
        key: &UserId,
        field: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.connection.clone();
        let _: i64 = self.run("HSET", conn.hset(key.as_str(), field, value)).await?;
        Ok(())
    }

    async fn delete_key(&self, key: &UserId) -> Result<(), RepositoryError> {
        let mut conn = self.connection.clone();
        let _: i64 = self.run("DEL", conn.del(key.as_str())).await?;
        Ok(())
    }
}
