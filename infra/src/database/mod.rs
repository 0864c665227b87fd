//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and migrations
//! - Repository implementations for identities and refresh tokens

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlIdentityRepository, MySqlRefreshTokenRepository};
