//! # Infrastructure Layer
//!
//! Concrete implementations of the storage and hashing seams declared in
//! `vp_core`:
//!
//! - **Database**: MySQL repositories using SQLx, plus pool setup and migrations
//! - **Memory**: process-local repositories for tests and local development
//! - **Security**: bcrypt password hashing

// Re-export core types for convenience
pub use vp_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// In-memory repository implementations
pub mod memory;

/// Credential hashing
pub mod security;

pub use database::{DatabasePool, MySqlIdentityRepository, MySqlRefreshTokenRepository};
pub use memory::{InMemoryIdentityRepository, InMemoryRefreshTokenRepository};
pub use security::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
