use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Refresh token storage, keyed by identity id.
///
/// Holds at most one record per identity.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Inserts or overwrites the record for `identity_id` in a single
    /// atomic step. Concurrent upserts for the same identity leave exactly
    /// one of the written values in place.
    ///
    /// # Arguments
    ///
    /// * `identity_id` - Identity the token belongs to
    /// * `value` - Refresh token value
    /// * `expiry_date` - Absolute expiry in epoch milliseconds
    ///
    /// # Returns
    ///
    /// The record as stored
    async fn upsert(
        &self,
        identity_id: i64,
        value: &str,
        expiry_date: i64,
    ) -> Result<RefreshToken, DomainError>;

    /// Finds the record for `identity_id`
    async fn find(&self, identity_id: i64) -> Result<Option<RefreshToken>, DomainError>;
}
