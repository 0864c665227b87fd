//! Mock implementation of IdentityRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::identity::{Identity, NewIdentity};
use crate::errors::{AuthError, DomainError};

use super::r#trait::IdentityRepository;

/// Mock identity repository for testing
pub struct MockIdentityRepository {
    identities: Arc<RwLock<HashMap<i64, Identity>>>,
    lookups: AtomicUsize,
}

impl MockIdentityRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            identities: Arc::new(RwLock::new(HashMap::new())),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of `find_by_id` calls so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Inserts an identity with a fixed id
    pub async fn seed(&self, identity: Identity) {
        self.identities.write().await.insert(identity.id, identity);
    }

    /// Removes an identity
    pub async fn remove(&self, id: i64) {
        self.identities.write().await.remove(&id);
    }
}

impl Default for MockIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for MockIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, DomainError> {
        let identities = self.identities.read().await;
        Ok(identities.values().find(|i| i.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let identities = self.identities.read().await;
        Ok(identities.get(&id).cloned())
    }

    async fn create(&self, identity: NewIdentity) -> Result<Identity, DomainError> {
        let mut identities = self.identities.write().await;

        if identities.values().any(|i| i.email == identity.email) {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let id = identities.keys().max().copied().unwrap_or(0) + 1;
        let created = Identity {
            id,
            email: identity.email,
            name: identity.name,
            password_hash: identity.password_hash,
            role: identity.role,
            created_at: Utc::now(),
        };
        identities.insert(id, created.clone());
        Ok(created)
    }
}
