//! bcrypt implementation of the core password hashing trait

use async_trait::async_trait;

use vp_core::errors::DomainError;
use vp_core::services::PasswordHasher;

/// bcrypt password hasher
///
/// Hashing runs on the tokio blocking pool so request workers keep serving.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom work factor; tests use the minimum of 4
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            bcrypt::hash(password, cost)
                .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
        })
        .await
        .map_err(|e| DomainError::internal(format!("Task join error: {}", e)))?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || {
            bcrypt::verify(password, &hash)
                .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
        })
        .await
        .map_err(|e| DomainError::internal(format!("Task join error: {}", e)))?
    }
}
