/// Bridge client - submits raw messages to the ingest endpoint
use crate::constants::{
    AUTH_TOKEN_HEADER, MAIL_FROM_HEADER, MAIL_TO_HEADER, RELAY_USER_AGENT, RFC822_CONTENT_TYPE,
};
use crate::error::RelayError;
use crate::models::{InboundMailEvent, RelayConfig};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Response received from the bridge
///
/// The body is kept only for failure diagnostics; it never influences a
/// successful disposition.
#[derive(Debug, Clone)]
pub struct BridgeResponse {
    pub status: u16,
    pub body: String,
}

impl BridgeResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[async_trait]
pub trait BridgeClient: Send + Sync {
    /// Submits one message to the bridge
    ///
    /// Any HTTP response, whatever its status, is `Ok`; only a network-level
    /// failure (DNS, connect, TLS, timeout) is `Err`.
    async fn submit(
        &self,
        event: &InboundMailEvent,
        config: &RelayConfig,
    ) -> Result<BridgeResponse, RelayError>;
}

/// HTTP bridge client backed by reqwest
pub struct HttpBridgeClient {
    client: reqwest::Client,
}

impl HttpBridgeClient {
    /// No relay-level timeout is configured; the transport and host platform
    /// defaults govern how long a submission may take.
    pub fn new() -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .user_agent(RELAY_USER_AGENT)
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BridgeClient for HttpBridgeClient {
    async fn submit(
        &self,
        event: &InboundMailEvent,
        config: &RelayConfig,
    ) -> Result<BridgeResponse, RelayError> {
        let response = self
            .client
            .post(config.bridge_url.clone())
            .header(AUTH_TOKEN_HEADER, &config.auth_token)
            .header(MAIL_FROM_HEADER, &event.sender)
            .header(MAIL_TO_HEADER, &event.recipient)
            .header(CONTENT_TYPE, RFC822_CONTENT_TYPE)
            .body(event.raw.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        // A status was already received; a failed body read degrades to an
        // empty diagnostic rather than a transport error.
        let body = response.text().await.unwrap_or_default();

        Ok(BridgeResponse { status, body })
    }
}
