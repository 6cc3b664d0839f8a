//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use bytes::Bytes;
use mailbridge::models::{InboundMailEvent, RelayConfig};
use std::path::PathBuf;

/// Shared secret used by all integration tests
pub const TEST_AUTH_TOKEN: &str = "test-token";

/// Get path to test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load a test email fixture
pub fn load_email_fixture(name: &str) -> Bytes {
    let path = fixtures_dir().join("emails").join(name);
    Bytes::from(std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", path)))
}

/// Build an inbound event carrying the given fixture
pub fn fixture_event(fixture: &str) -> InboundMailEvent {
    InboundMailEvent::new("a@x.com", "b@y.com", load_email_fixture(fixture))
}

/// Build a relay config pointing at the given bridge base URL
pub fn bridge_config(base_url: &str) -> RelayConfig {
    RelayConfig::new(&format!("{}/ingest", base_url), TEST_AUTH_TOKEN, None)
        .expect("test config should be valid")
}

/// Same as `bridge_config` but with a catch-all forward configured
pub fn bridge_config_with_fallback(base_url: &str, target: &str) -> RelayConfig {
    RelayConfig::new(
        &format!("{}/ingest", base_url),
        TEST_AUTH_TOKEN,
        Some(target.to_string()),
    )
    .expect("test config should be valid")
}

/// A local address nothing listens on, for transport-failure tests
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
