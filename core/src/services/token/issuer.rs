//! Access and refresh token issuance

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::identity::Role;
use crate::domain::entities::token::{AccessClaims, RefreshClaims, TokenPair};
use crate::errors::DomainError;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// A signed token together with the instant it stops being valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Computes expiries and produces access/refresh tokens
pub struct TokenIssuer {
    codec: Arc<TokenCodec>,
    config: TokenServiceConfig,
}

impl TokenIssuer {
    /// Creates a new token issuer
    ///
    /// # Arguments
    ///
    /// * `codec` - Shared codec holding the signing key
    /// * `config` - Issuer name and token lifetimes
    ///
    /// # Returns
    ///
    /// The issuer, or a validation error if the lifetimes are inconsistent
    pub fn new(codec: Arc<TokenCodec>, config: TokenServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { codec, config })
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues an access token valid for `[now, now + access_ttl)`
    pub fn issue_access_token(
        &self,
        identity_id: i64,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<SignedToken, DomainError> {
        let claims = AccessClaims::new(
            identity_id,
            role,
            &self.config.issuer,
            now,
            self.config.access_token_ttl,
        );
        let token = self.codec.encode(&claims)?;

        Ok(SignedToken {
            token,
            expires_at: now + self.config.access_token_ttl,
        })
    }

    /// Issues an identity-free refresh token valid for `[now, now + refresh_ttl)`
    pub fn issue_refresh_token(&self, now: DateTime<Utc>) -> Result<SignedToken, DomainError> {
        let claims = RefreshClaims::new(&self.config.issuer, now, self.config.refresh_token_ttl);
        let token = self.codec.encode(&claims)?;

        Ok(SignedToken {
            token,
            expires_at: now + self.config.refresh_token_ttl,
        })
    }

    /// Issues a fresh access/refresh pair
    pub fn issue_token_pair(
        &self,
        identity_id: i64,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, DomainError> {
        let access = self.issue_access_token(identity_id, role, now)?;
        let refresh = self.issue_refresh_token(now)?;

        Ok(TokenPair::new(
            access.token,
            refresh.token,
            refresh.expires_at.timestamp_millis(),
        ))
    }

    /// Issues a new access token and passes the existing refresh value and
    /// expiry through unchanged
    pub fn reissue_token_pair(
        &self,
        identity_id: i64,
        role: Role,
        refresh_token: String,
        refresh_token_expiry: i64,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, DomainError> {
        let access = self.issue_access_token(identity_id, role, now)?;
        Ok(TokenPair::new(access.token, refresh_token, refresh_token_expiry))
    }
}
