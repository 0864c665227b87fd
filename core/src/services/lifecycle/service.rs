//! Login, signup and reissue orchestration

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::identity::{Identity, NewIdentity};
use crate::domain::entities::token::{AccessClaims, TokenPair};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{IdentityRepository, RefreshTokenRepository};
use crate::services::password::PasswordHasher;
use crate::services::session::extract_bearer;
use crate::services::token::TokenIssuer;

/// Orchestrates the session lifecycle: signup, login and access token reissue
pub struct TokenLifecycleService<I, R, H>
where
    I: IdentityRepository,
    R: RefreshTokenRepository,
    H: PasswordHasher,
{
    /// Identity lookup and registration
    identities: Arc<I>,
    /// One refresh token record per identity
    refresh_tokens: Arc<R>,
    /// Credential hashing
    hasher: Arc<H>,
    /// Token issuance
    issuer: Arc<TokenIssuer>,
}

impl<I, R, H> TokenLifecycleService<I, R, H>
where
    I: IdentityRepository,
    R: RefreshTokenRepository,
    H: PasswordHasher,
{
    /// Create a new lifecycle service
    ///
    /// # Arguments
    ///
    /// * `identities` - Identity repository
    /// * `refresh_tokens` - Refresh token repository
    /// * `hasher` - Password hasher
    /// * `issuer` - Token issuer
    pub fn new(
        identities: Arc<I>,
        refresh_tokens: Arc<R>,
        hasher: Arc<H>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            identities,
            refresh_tokens,
            hasher,
            issuer,
        }
    }

    /// Registers a new identity with the `USER` role
    ///
    /// # Errors
    ///
    /// `AuthError::EmailAlreadyExists` if the email is taken
    pub async fn signup(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<Identity, DomainError> {
        if self.identities.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let password_hash = self.hasher.hash(password).await?;
        let identity = self
            .identities
            .create(NewIdentity::user(email, name, password_hash))
            .await?;

        tracing::info!(identity_id = identity.id, "Identity registered");
        Ok(identity)
    }

    /// Authenticates with email and password and starts a new session
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, DomainError> {
        self.login_at(email, password, Utc::now()).await
    }

    /// [`TokenLifecycleService::login`] with an explicit clock
    ///
    /// Overwrites any refresh token previously stored for the identity.
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - no identity with this email
    /// * `AuthError::LoginFailed` - password mismatch
    pub async fn login_at(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, DomainError> {
        let identity = self
            .identities
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.hasher.verify(password, &identity.password_hash).await? {
            tracing::info!(identity_id = identity.id, "Login rejected: bad credential");
            return Err(AuthError::LoginFailed.into());
        }

        let pair = self.issuer.issue_token_pair(identity.id, identity.role, now)?;
        self.refresh_tokens
            .upsert(identity.id, &pair.refresh_token, pair.refresh_token_expiry)
            .await?;

        tracing::info!(identity_id = identity.id, "Login succeeded");
        Ok(pair)
    }

    /// Exchanges a possibly expired access token plus the current refresh
    /// token for a new access token
    pub async fn reissue(
        &self,
        authorization: &str,
        refresh_token: &str,
    ) -> Result<TokenPair, DomainError> {
        self.reissue_at(authorization, refresh_token, Utc::now()).await
    }

    /// [`TokenLifecycleService::reissue`] with an explicit clock
    ///
    /// The stored refresh token and its expiry are returned unchanged; this
    /// path never writes to the refresh token store.
    ///
    /// # Arguments
    ///
    /// * `authorization` - `Bearer <access token>`; the token may be expired
    /// * `refresh_token` - Refresh value returned by the last login
    /// * `now` - Instant used for issuance and the stored expiry check
    ///
    /// # Errors
    ///
    /// * `TokenError::ModeInvalid` - header lacks the bearer scheme
    /// * `TokenError::Malformed` / `TokenError::SignatureInvalid` - access
    ///   token not issued by this process; checked before any storage access
    /// * `TokenError::RefreshTokenInvalid` - no stored record, value
    ///   mismatch, or the stored record has expired
    /// * `AuthError::UserNotFound` - identity no longer exists
    pub async fn reissue_at(
        &self,
        authorization: &str,
        refresh_token: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, DomainError> {
        let access_token = extract_bearer(authorization)?;
        let claims: AccessClaims = self.issuer.codec().decode_ignoring_expiry(access_token)?;
        let identity_id = claims.identity_id()?;

        let stored = self
            .refresh_tokens
            .find(identity_id)
            .await?
            .ok_or(TokenError::RefreshTokenInvalid)?;

        if !stored.matches(refresh_token) {
            tracing::warn!(identity_id, "Reissue rejected: refresh token mismatch");
            return Err(TokenError::RefreshTokenInvalid.into());
        }
        if stored.is_expired_at(now) {
            tracing::info!(identity_id, "Reissue rejected: refresh token expired");
            return Err(TokenError::RefreshTokenInvalid.into());
        }

        let identity = self
            .identities
            .find_by_id(identity_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let pair = self.issuer.reissue_token_pair(
            identity.id,
            identity.role,
            stored.value().to_string(),
            stored.expiry_date(),
            now,
        )?;

        tracing::debug!(identity_id, "Access token reissued");
        Ok(pair)
    }
}
