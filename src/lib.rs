// Library root - exports public API

pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::RelayError;
pub use handlers::relay::{RelayContext, handle};
pub use models::{Disposition, InboundMailEvent, RelayConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
