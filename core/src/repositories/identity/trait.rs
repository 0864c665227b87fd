use async_trait::async_trait;

use crate::domain::entities::identity::{Identity, NewIdentity};
use crate::errors::DomainError;

/// Identity lookup and registration
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Finds an identity by its email
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, DomainError>;

    /// Finds an identity by its numeric id
    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, DomainError>;

    /// Creates a new identity
    ///
    /// # Errors
    ///
    /// `AuthError::EmailAlreadyExists` if the email is taken
    async fn create(&self, identity: NewIdentity) -> Result<Identity, DomainError>;
}
