use std::env;
use std::sync::Arc;
use std::time::Duration;

use business::domain::cart::repository::CartStore;
use persistence::cart::memory_store::CartStoreInMemory;
use persistence::cart::redis_store::CartStoreRedis;
use persistence::db::{RedisConfig, create_redis_connection};
use thiserror::Error;

const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";
const DEFAULT_REDIS_TIMEOUT_MS: u64 = 1000;

#[derive(Error, Debug)]
pub enum StoreConfigError {
    #[error("config.unknown_store_backend: {0}")]
    UnknownBackend(String),
    #[error("config.invalid_redis_timeout: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Result<Self, StoreConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(StoreConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Cart store selection and connection settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub redis_url: String,
    pub redis_timeout: Duration,
}

impl StoreConfig {
    /// Environment variables:
    /// - CART_STORE: "redis" or "memory" (default: "redis")
    /// - REDIS_URL: Redis connection string (default: "redis://localhost:6379/0")
    /// - REDIS_TIMEOUT_MS: Per-command timeout in milliseconds (default: 1000)
    pub fn from_env() -> Result<Self, StoreConfigError> {
        let backend = match env::var("CART_STORE") {
            Ok(value) => StoreBackend::parse(&value)?,
            Err(_) => StoreBackend::Redis,
        };
        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        let redis_timeout = match env::var("REDIS_TIMEOUT_MS") {
            Ok(value) => parse_timeout(&value)?,
            Err(_) => Duration::from_millis(DEFAULT_REDIS_TIMEOUT_MS),
        };

        Ok(Self {
            backend,
            redis_url,
            redis_timeout,
        })
    }
}

fn parse_timeout(value: &str) -> Result<Duration, StoreConfigError> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(StoreConfigError::InvalidTimeout(value.to_string())),
    }
}

/// Builds the configured cart store
///
/// # Errors
/// Returns error if the Redis URL is invalid or the server is unreachable
pub async fn init_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn CartStore>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory cart store; carts are lost on restart");
            Ok(Arc::new(CartStoreInMemory::new()))
        }
        StoreBackend::Redis => {
            let redis_config = RedisConfig {
                url: config.redis_url.clone(),
                timeout: config.redis_timeout,
            };
            let connection = create_redis_connection(&redis_config).await?;
            Ok(Arc::new(CartStoreRedis::new(
                connection,
                redis_config.timeout,
            )))
        }
    }
}
