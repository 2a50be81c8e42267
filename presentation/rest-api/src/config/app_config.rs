use super::{
    cart_config::CartConfig, cors_config, server_config::ServerConfig, store_config::StoreConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub store: StoreConfig,
    pub cart: CartConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            store: StoreConfig::from_env()?,
            cart: CartConfig::from_env(),
        })
    }
}
