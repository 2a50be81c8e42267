use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, store_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Cart service entry point
///
/// - config/: listener, CORS, store backend and engine switches
/// - setup/: dependency wiring and HTTP server
/// - api/: routes, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG from .env is honoured
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Connect the cart store
    let store = store_config::init_store(&config.store).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(store, &config.cart);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
