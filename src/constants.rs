/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Wire Contract
// ============================================================================
/// Header carrying the shared-secret token to the bridge
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Header carrying the envelope sender
pub const MAIL_FROM_HEADER: &str = "X-Mail-From";

/// Header carrying the envelope recipient
pub const MAIL_TO_HEADER: &str = "X-Mail-To";

/// Content type for the raw message body
pub const RFC822_CONTENT_TYPE: &str = "message/rfc822";

/// User agent presented to the bridge
pub const RELAY_USER_AGENT: &str = concat!("mailbridge-relay/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Configuration
// ============================================================================

/// Environment variable for the bridge ingest endpoint
pub const ENV_BRIDGE_URL: &str = "BRIDGE_URL";

/// Environment variable for the shared-secret token (required, no default)
pub const ENV_AUTH_TOKEN: &str = "AUTH_TOKEN";

/// Environment variable for the optional catch-all forward address
pub const ENV_FALLBACK_FORWARD: &str = "FALLBACK_FORWARD";

/// Default bridge endpoint when BRIDGE_URL is not set
pub const DEFAULT_BRIDGE_URL: &str = "https://bridge-server:8888/ingest";

// ============================================================================
// SMTP Reply Codes
// ============================================================================

/// Reply code for a temporary rejection (sending MTA retries later)
pub const TEMPORARY_FAILURE_CODE: u16 = 450;

/// Reply code for a permanent rejection (sending MTA bounces)
pub const PERMANENT_FAILURE_CODE: u16 = 550;

/// Reason text attached to temporary rejections
pub const TEMPORARY_FAILURE_REASON: &str = "Temporary relay failure, please retry later";

// ============================================================================
// Testing Constants
// ============================================================================
