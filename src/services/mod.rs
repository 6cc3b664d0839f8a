/// Service layer - bridge client and configuration provider
pub mod bridge;
pub mod config;
