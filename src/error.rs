/// Error types for the Mailbridge relay
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bridge rejected message with status {status}: {body}")]
    UpstreamRejected { status: u16, body: String },

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RelayError {
    /// Determines if an error is retriable
    ///
    /// A transport failure cannot be distinguished from a transient outage,
    /// so the sending MTA is asked to retry. An explicit bridge refusal and a
    /// bad configuration are permanent for this message.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::UpstreamRejected { .. } => false,
            Self::Config(_) => false,
        }
    }
}

// Implement conversions for common error types
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<url::ParseError> for RelayError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::env::VarError> for RelayError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}
