//! Configuration for the token services

use chrono::Duration;
use vp_shared::JwtConfig;

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_SECONDS, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_SECONDS,
};
use crate::errors::DomainError;

/// Configuration for token issuance
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Issuer written into and required from every token
    pub issuer: String,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            issuer: JWT_ISSUER.to_string(),
            access_token_ttl: Duration::seconds(ACCESS_TOKEN_EXPIRY_SECONDS),
            refresh_token_ttl: Duration::seconds(REFRESH_TOKEN_EXPIRY_SECONDS),
        }
    }
}

impl TokenServiceConfig {
    /// Checks that both lifetimes are positive and the access lifetime is
    /// strictly shorter than the refresh lifetime
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.access_token_ttl <= Duration::zero() || self.refresh_token_ttl <= Duration::zero() {
            return Err(DomainError::validation("token lifetimes must be positive"));
        }
        if self.access_token_ttl >= self.refresh_token_ttl {
            return Err(DomainError::validation(
                "access token lifetime must be shorter than refresh token lifetime",
            ));
        }
        if self.issuer.trim().is_empty() {
            return Err(DomainError::validation("token issuer must not be blank"));
        }
        Ok(())
    }
}

fn ttl_from_seconds(seconds: i64, name: &str) -> Result<Duration, DomainError> {
    Duration::try_seconds(seconds)
        .ok_or_else(|| DomainError::validation(format!("{} is out of range: {}", name, seconds)))
}

impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = DomainError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            issuer: config.issuer.clone(),
            access_token_ttl: ttl_from_seconds(config.access_token_expiry, "access token expiry")?,
            refresh_token_ttl: ttl_from_seconds(
                config.refresh_token_expiry,
                "refresh token expiry",
            )?,
        })
    }
}
