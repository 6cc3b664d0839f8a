/// Relay handler - forwards one inbound mail event to the bridge
use crate::constants::TEMPORARY_FAILURE_REASON;
use crate::error::RelayError;
use crate::models::{Disposition, InboundMailEvent, RelayConfig};
use crate::services::bridge::{BridgeClient, HttpBridgeClient};
use crate::services::config::{ConfigProvider, EnvConfigProvider};
use crate::utils::logging::redact_email;
use std::sync::Arc;
use tracing::{error, info};

/// Relay handler context
pub struct RelayContext {
    pub bridge: Arc<dyn BridgeClient>,
    pub config: Arc<RelayConfig>,
}

impl RelayContext {
    pub async fn from_env() -> Result<Self, RelayError> {
        let provider = EnvConfigProvider::new()?;
        let config = provider.get_config().await?;

        Ok(Self {
            bridge: Arc::new(HttpBridgeClient::new()?),
            config: Arc::new(config),
        })
    }

    pub fn new(bridge: Arc<dyn BridgeClient>, config: RelayConfig) -> Self {
        Self {
            bridge,
            config: Arc::new(config),
        }
    }
}

/// Handles one inbound mail event
///
/// Performs exactly one bridge submission and maps its outcome onto a
/// disposition. Infallible by design: every failure becomes a disposition the
/// host can act on, nothing is swallowed and nothing is retried here. A
/// temporary rejection relies on the sending MTA's own retry schedule.
#[tracing::instrument(
    name = "relay.handle",
    skip(event, ctx),
    fields(
        sender = %redact_email(&event.sender),
        recipient = %redact_email(&event.recipient),
        size = event.raw.len()
    )
)]
pub async fn handle(event: &InboundMailEvent, ctx: &RelayContext) -> Disposition {
    info!("Relaying message to {}", ctx.config.bridge_url);

    match ctx.bridge.submit(event, &ctx.config).await {
        Ok(response) if response.is_success() => {
            info!(status = response.status, "Bridge accepted message");
            Disposition::Accept
        }
        Ok(response) => {
            error!(
                status = response.status,
                body = %redact_email(&response.body),
                "Bridge refused message"
            );
            failure_disposition(
                &RelayError::UpstreamRejected {
                    status: response.status,
                    body: response.body,
                },
                &ctx.config,
            )
        }
        Err(e) => {
            error!("Bridge submission failed: {}", e);
            failure_disposition(&e, &ctx.config)
        }
    }
}

/// Maps a failed submission onto a disposition
///
/// The catch-all forward, when configured, takes precedence on every failure
/// path. Otherwise a retriable error defers the message (the bridge may just
/// be down) and anything else bounces it with the upstream diagnostics.
fn failure_disposition(error: &RelayError, config: &RelayConfig) -> Disposition {
    if let Some(target) = &config.fallback_forward_address {
        info!(target = %redact_email(target), "Falling back to catch-all forward");
        return Disposition::Forward {
            target: target.clone(),
        };
    }

    if error.is_retriable() {
        Disposition::deferred(TEMPORARY_FAILURE_REASON)
    } else {
        Disposition::bounced(redact_email(&error.to_string()))
    }
}
