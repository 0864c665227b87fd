//! Mock implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository for testing
pub struct MockRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<i64, RefreshToken>>>,
    finds: AtomicUsize,
    upserts: AtomicUsize,
}

impl MockRefreshTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            finds: AtomicUsize::new(0),
            upserts: AtomicUsize::new(0),
        }
    }

    /// Number of `find` calls so far
    pub fn find_count(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    /// Number of `upsert` calls so far
    pub fn upsert_count(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }

    /// Writes a record directly, bypassing the counters
    pub async fn seed(&self, token: RefreshToken) {
        self.tokens.write().await.insert(token.id(), token);
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn upsert(
        &self,
        identity_id: i64,
        value: &str,
        expiry_date: i64,
    ) -> Result<RefreshToken, DomainError> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(&identity_id) {
            Some(existing) => {
                existing.update_token(value, expiry_date)?;
                Ok(existing.clone())
            }
            None => {
                let token = RefreshToken::new(identity_id, value, expiry_date)?;
                tokens.insert(identity_id, token.clone());
                Ok(token)
            }
        }
    }

    async fn find(&self, identity_id: i64) -> Result<Option<RefreshToken>, DomainError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        let tokens = self.tokens.read().await;
        Ok(tokens.get(&identity_id).cloned())
    }
}
