/// Logging utilities for PII redaction and secure logging
///
/// Envelope addresses are personal data; everything this crate logs goes
/// through these helpers so only the domain part reaches the log sink.
use regex::Regex;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());

/// Initializes the structured JSON tracing subscriber
///
/// Hosts embedding the relay call this once at startup. The filter honors
/// `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();
}

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use mailbridge::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("blocked sender test@acme.com"), "blocked sender ***@acme.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if let Some(at_pos) = email.find('@') {
                format!("***{}", &email[at_pos..])
            } else {
                "***@***".to_string()
            }
        })
        .to_string()
}

/// Redacts message content for logging (shows length only)
pub fn redact_body(body: &[u8]) -> String {
    format!("[{} bytes]", body.len())
}
