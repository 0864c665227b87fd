//! Shared configuration and response types for the VoicePocket server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error and response envelopes returned by the API

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig, StorageBackend,
};
pub use types::{ErrorResponse, HealthResponse};
