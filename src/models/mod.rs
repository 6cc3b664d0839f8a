/// Data models for the relay
pub mod config;
pub mod event;

pub use config::RelayConfig;
pub use event::{Disposition, InboundMailEvent};
