use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use vp_core::domain::entities::identity::{Identity, NewIdentity};
use vp_core::errors::{AuthError, DomainError};
use vp_core::repositories::IdentityRepository;

#[derive(Default)]
struct Identities {
    by_id: HashMap<i64, Identity>,
    next_id: i64,
}

/// Identity store held in memory, ids assigned sequentially from 1
#[derive(Default)]
pub struct InMemoryIdentityRepository {
    inner: RwLock<Identities>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an identity with a caller-chosen id, replacing any existing
    /// one with that id
    pub async fn insert(&self, identity: Identity) {
        let mut inner = self.inner.write().await;
        inner.next_id = inner.next_id.max(identity.id);
        inner.by_id.insert(identity.id, identity);
    }

    /// Removes an identity
    pub async fn remove(&self, id: i64) -> Option<Identity> {
        self.inner.write().await.by_id.remove(&id)
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.by_id.values().find(|i| i.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, DomainError> {
        Ok(self.inner.read().await.by_id.get(&id).cloned())
    }

    async fn create(&self, identity: NewIdentity) -> Result<Identity, DomainError> {
        let mut inner = self.inner.write().await;

        if inner.by_id.values().any(|i| i.email == identity.email) {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        inner.next_id += 1;
        let created = Identity {
            id: inner.next_id,
            email: identity.email,
            name: identity.name,
            password_hash: identity.password_hash,
            role: identity.role,
            created_at: Utc::now(),
        };
        inner.by_id.insert(created.id, created.clone());
        Ok(created)
    }
}
