//! Credential hashing seam

use async_trait::async_trait;

use crate::errors::DomainError;

/// One-way password hashing, implemented in the infrastructure layer
///
/// Implementations must not block the calling executor thread.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password for storage
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Checks a plaintext password against a stored hash
    ///
    /// # Returns
    ///
    /// `Ok(false)` on mismatch; `Err` only if the hash itself is unusable
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
