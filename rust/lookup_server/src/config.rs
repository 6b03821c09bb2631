// src/config.rs

use stock_query::ProviderConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub provider: ProviderConfig,
}

impl ServerConfig {
    /// Loads `.env` if present, then reads `LOOKUP_BIND_ADDR` and the provider settings.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let bind_addr = std::env::var("LOOKUP_BIND_ADDR")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        ServerConfig {
            bind_addr,
            provider: ProviderConfig::from_env(),
        }
    }
}
