use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use vp_core::domain::entities::token::RefreshToken;
use vp_core::errors::DomainError;
use vp_core::repositories::RefreshTokenRepository;

/// Refresh token store held in a map keyed by identity id
#[derive(Default)]
pub struct InMemoryRefreshTokenRepository {
    tokens: RwLock<HashMap<i64, RefreshToken>>,
}

impl InMemoryRefreshTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

#[async_trait]
impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn upsert(
        &self,
        identity_id: i64,
        value: &str,
        expiry_date: i64,
    ) -> Result<RefreshToken, DomainError> {
        let token = RefreshToken::new(identity_id, value, expiry_date)?;
        // Single write lock: last writer wins
        self.tokens.write().await.insert(identity_id, token.clone());
        Ok(token)
    }

    async fn find(&self, identity_id: i64) -> Result<Option<RefreshToken>, DomainError> {
        Ok(self.tokens.read().await.get(&identity_id).cloned())
    }
}
