/// Configuration service - loads config from environment variables
use crate::constants::{DEFAULT_BRIDGE_URL, ENV_AUTH_TOKEN, ENV_BRIDGE_URL, ENV_FALLBACK_FORWARD};
use crate::error::RelayError;
use crate::models::RelayConfig;
use async_trait::async_trait;

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_config(&self) -> Result<RelayConfig, RelayError>;
    async fn refresh(&self) -> Result<(), RelayError>;
}

/// Environment variable-based configuration provider
///
/// Fails at construction when the shared secret is missing or empty, before
/// any outbound call is attempted.
pub struct EnvConfigProvider {
    config: RelayConfig,
}

impl EnvConfigProvider {
    pub fn new() -> Result<Self, RelayError> {
        let bridge_url =
            std::env::var(ENV_BRIDGE_URL).unwrap_or_else(|_| DEFAULT_BRIDGE_URL.to_string());

        let auth_token = std::env::var(ENV_AUTH_TOKEN)
            .map_err(|_| RelayError::Config("Missing AUTH_TOKEN env var".to_string()))?;

        let fallback_forward_address = std::env::var(ENV_FALLBACK_FORWARD)
            .ok()
            .filter(|s| !s.trim().is_empty());

        let config = RelayConfig::new(&bridge_url, auth_token, fallback_forward_address)?;

        tracing::info!("Configuration validated successfully");

        Ok(Self { config })
    }
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn get_config(&self) -> Result<RelayConfig, RelayError> {
        // Configuration is immutable for the lifetime of the process
        Ok(self.config.clone())
    }

    async fn refresh(&self) -> Result<(), RelayError> {
        // No-op: config is loaded once at startup
        Ok(())
    }
}
