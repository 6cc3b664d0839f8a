/// Configuration models
use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Relay configuration
///
/// Built once at startup and immutable afterwards. There is deliberately no
/// default auth token: a missing secret is a configuration error, never a
/// silent fallback.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayConfig {
    /// Absolute HTTP(S) endpoint of the bridge ingest server
    pub bridge_url: Url,
    /// Shared secret presented in the X-Auth-Token header
    pub auth_token: String,
    /// Optional catch-all forward address, consulted only on failure paths
    #[serde(default)]
    pub fallback_forward_address: Option<String>,
}

impl RelayConfig {
    pub fn new(
        bridge_url: &str,
        auth_token: impl Into<String>,
        fallback_forward_address: Option<String>,
    ) -> Result<Self, RelayError> {
        let config = Self {
            bridge_url: Url::parse(bridge_url)?,
            auth_token: auth_token.into(),
            fallback_forward_address,
        };

        config
            .validate()
            .map_err(|e| RelayError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }

    /// Validates configuration is valid
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.bridge_url.scheme(), "http" | "https") {
            return Err(format!(
                "Bridge URL must be http(s), got: {}",
                self.bridge_url
            ));
        }

        if self.auth_token.trim().is_empty() {
            return Err("Auth token must not be empty".to_string());
        }

        if let Some(target) = &self.fallback_forward_address
            && !target.contains('@')
        {
            return Err(format!("Invalid fallback forward address: {}", target));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::{TEST_AUTH_TOKEN, TEST_BRIDGE_URL};

    #[test]
    fn test_valid_config() {
        let config = RelayConfig::new(TEST_BRIDGE_URL, TEST_AUTH_TOKEN, None).unwrap();
        assert_eq!(config.bridge_url.as_str(), TEST_BRIDGE_URL);
        assert!(config.fallback_forward_address.is_none());
    }

    #[test]
    fn test_empty_auth_token_rejected() {
        let result = RelayConfig::new(TEST_BRIDGE_URL, "", None);
        assert!(matches!(result, Err(RelayError::Config(_))));

        let result = RelayConfig::new(TEST_BRIDGE_URL, "   ", None);
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = RelayConfig::new("ftp://bridge.example.com/ingest", TEST_AUTH_TOKEN, None);
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[test]
    fn test_unparseable_url_rejected() {
        let result = RelayConfig::new("not a url", TEST_AUTH_TOKEN, None);
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[test]
    fn test_fallback_address_must_be_a_mailbox() {
        let result = RelayConfig::new(
            TEST_BRIDGE_URL,
            TEST_AUTH_TOKEN,
            Some("not-a-mailbox".to_string()),
        );
        assert!(matches!(result, Err(RelayError::Config(_))));

        let config = RelayConfig::new(
            TEST_BRIDGE_URL,
            TEST_AUTH_TOKEN,
            Some("catchall@example.com".to_string()),
        )
        .unwrap();
        assert_eq!(
            config.fallback_forward_address.as_deref(),
            Some("catchall@example.com")
        );
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{
            "bridge_url": "https://bridge-server:8888/ingest",
            "auth_token": "secret"
        }"#;

        let config: RelayConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.bridge_url.port(), Some(8888));
        assert!(config.fallback_forward_address.is_none());
    }
}
