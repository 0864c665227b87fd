//! Per-request bearer token authentication

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::AccessClaims;
use crate::domain::value_objects::Principal;
use crate::errors::{AuthError, DomainError};
use crate::repositories::IdentityRepository;
use crate::services::token::TokenCodec;

use super::bearer::extract_bearer;
use super::context::SessionContext;

/// Turns a raw `Authorization` header into a [`SessionContext`].
///
/// Object-safe so the HTTP layer can hold it without knowing the
/// identity store.
#[async_trait]
pub trait RequestAuthenticator: Send + Sync {
    async fn authenticate(&self, authorization: Option<&str>) -> SessionContext;
}

/// Verifies access tokens and resolves their subject to a principal
pub struct SessionAuthenticator<I: IdentityRepository> {
    codec: Arc<TokenCodec>,
    identities: Arc<I>,
}

impl<I: IdentityRepository> SessionAuthenticator<I> {
    pub fn new(codec: Arc<TokenCodec>, identities: Arc<I>) -> Self {
        Self { codec, identities }
    }

    /// Runs every check against a present header at time `now`
    ///
    /// # Arguments
    ///
    /// * `authorization` - Raw header value, including the scheme
    /// * `now` - Instant used for the expiry check
    ///
    /// # Returns
    ///
    /// The principal, or the first failing stage's error
    pub async fn authenticate_at(
        &self,
        authorization: &str,
        now: DateTime<Utc>,
    ) -> Result<Principal, DomainError> {
        let token = extract_bearer(authorization)?;
        let claims: AccessClaims = self.codec.decode(token, now)?;
        claims.role()?;
        let identity_id = claims.identity_id()?;

        let identity = self
            .identities
            .find_by_id(identity_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(Principal::from(&identity))
    }
}

#[async_trait]
impl<I: IdentityRepository> RequestAuthenticator for SessionAuthenticator<I> {
    async fn authenticate(&self, authorization: Option<&str>) -> SessionContext {
        let Some(header) = authorization else {
            return SessionContext::anonymous();
        };

        match self.authenticate_at(header, Utc::now()).await {
            Ok(principal) => SessionContext::authenticated(principal),
            Err(e) => {
                tracing::debug!(error = %e, "Request authentication failed");
                SessionContext::failed(e)
            }
        }
    }
}
