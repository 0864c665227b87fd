//! Configuration module
//!
//! - `auth` - JWT signing and token lifetime configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Backing store for identities and refresh tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// MySQL via sqlx
    #[default]
    Mysql,
    /// Process-local maps, lost on restart
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(StorageBackend::Mysql),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Storage backend selection
    #[serde(default)]
    pub storage: StorageBackend,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, String> {
        let storage = match std::env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };

        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            storage,
        })
    }

    /// Reject configurations that must never reach production
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.environment.is_production() && self.storage == StorageBackend::Memory {
            return Err("in-memory storage is not allowed in production".to_string());
        }
        if self.auth.jwt.access_token_expiry >= self.auth.jwt.refresh_token_expiry {
            return Err("access token expiry must be shorter than refresh token expiry".to_string());
        }
        Ok(())
    }
}
