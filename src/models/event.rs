/// Inbound mail event and disposition models
use crate::constants::{PERMANENT_FAILURE_CODE, TEMPORARY_FAILURE_CODE};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One inbound message as handed over by the host platform
///
/// The raw bytes are the full RFC 822 wire format of the message. The relay
/// never inspects or transforms them; they are forwarded to the bridge
/// byte-for-byte.
#[derive(Debug, Clone)]
pub struct InboundMailEvent {
    /// Envelope sender (MAIL FROM)
    pub sender: String,
    /// Envelope recipient (RCPT TO)
    pub recipient: String,
    /// Unparsed message in RFC 822 wire format
    pub raw: Bytes,
}

impl InboundMailEvent {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, raw: Bytes) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            raw,
        }
    }
}

/// Final decision for one inbound message
///
/// Exactly one disposition is produced per event. The host-boundary adapter
/// in `handlers` translates it into the platform's mutation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Disposition {
    /// Bridge confirmed ingestion; the message is delivered
    Accept,
    /// Rejected with an SMTP reply code; 4xx defers, 5xx bounces
    Reject { reason: String, code: u16 },
    /// Handed off to the platform's catch-all forwarding
    Forward { target: String },
}

impl Disposition {
    /// Permanent rejection (5xx): the sending MTA generates a bounce
    pub fn is_permanent_reject(&self) -> bool {
        matches!(self, Self::Reject { code, .. } if (500..=599).contains(code))
    }

    /// Temporary rejection (4xx): the sending MTA retries later
    pub fn is_temporary_reject(&self) -> bool {
        matches!(self, Self::Reject { code, .. } if (400..=499).contains(code))
    }

    /// Temporary rejection with the standard deferral code
    pub fn deferred(reason: impl Into<String>) -> Self {
        Self::Reject {
            reason: reason.into(),
            code: TEMPORARY_FAILURE_CODE,
        }
    }

    /// Permanent rejection with the standard bounce code
    pub fn bounced(reason: impl Into<String>) -> Self {
        Self::Reject {
            reason: reason.into(),
            code: PERMANENT_FAILURE_CODE,
        }
    }
}
