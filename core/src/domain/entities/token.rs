//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::identity::Role;
use crate::errors::{DomainError, TokenError};

/// Access token lifetime (1 hour)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 60 * 60;

/// Refresh token lifetime (14 days)
pub const REFRESH_TOKEN_EXPIRY_SECONDS: i64 = 14 * 24 * 60 * 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "voicepocket";

/// Grant type reported alongside every token pair
pub const GRANT_TYPE: &str = "Bearer";

/// Claims that embed their own expiry, in epoch seconds.
pub trait ExpiringClaims {
    fn expires_at(&self) -> i64;

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.expires_at()
    }
}

/// Claims structure for the access token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (identity id, decimal)
    pub sub: String,

    /// Role name at issuance time. Kept as a raw string so that an unknown or
    /// missing role surfaces as a role failure rather than a parse failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessClaims {
    /// Creates claims valid for `[now, now + ttl)`
    pub fn new(
        identity_id: i64,
        role: Role,
        issuer: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: identity_id.to_string(),
            role: Some(role.as_str().to_string()),
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Parses the subject into an identity id
    pub fn identity_id(&self) -> Result<i64, TokenError> {
        match self.sub.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(TokenError::Malformed),
        }
    }

    /// Parses the role claim
    pub fn role(&self) -> Result<Role, TokenError> {
        self.role
            .as_deref()
            .and_then(|role| role.parse().ok())
            .ok_or(TokenError::EntryPointDenied)
    }
}

impl ExpiringClaims for AccessClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Claims structure for the refresh token payload.
///
/// Carries no identity: the binding between a refresh value and an identity
/// lives only in the refresh token store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Random nonce so that two refresh tokens are never equal
    pub jti: String,
}

impl RefreshClaims {
    /// Creates claims valid for `[now, now + ttl)`
    pub fn new(issuer: &str, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

impl ExpiringClaims for RefreshClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Refresh token record, one per identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Identity id this token belongs to
    id: i64,

    /// Current refresh token value
    value: String,

    /// Absolute expiry in epoch milliseconds
    expiry_date: i64,
}

impl RefreshToken {
    /// Creates a new refresh token record
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if `id <= 0`, `value` is blank or
    /// `expiry_date <= 0`.
    pub fn new(id: i64, value: impl Into<String>, expiry_date: i64) -> Result<Self, DomainError> {
        Ok(Self {
            id: validate_id(id)?,
            value: validate_value(value.into())?,
            expiry_date: validate_expiry_date(expiry_date)?,
        })
    }

    /// Overwrites the value and expiry, re-checking the same invariants
    pub fn update_token(
        &mut self,
        value: impl Into<String>,
        expiry_date: i64,
    ) -> Result<(), DomainError> {
        let value = validate_value(value.into())?;
        let expiry_date = validate_expiry_date(expiry_date)?;
        self.value = value;
        self.expiry_date = expiry_date;
        Ok(())
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expiry_date(&self) -> i64 {
        self.expiry_date
    }

    /// Byte-exact, constant-time comparison against a supplied value
    pub fn matches(&self, supplied: &str) -> bool {
        constant_time_eq::constant_time_eq(self.value.as_bytes(), supplied.as_bytes())
    }

    /// Checks if the stored expiry has passed
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() >= self.expiry_date
    }
}

fn validate_id(id: i64) -> Result<i64, DomainError> {
    if id <= 0 {
        return Err(DomainError::validation("refresh token id must be positive"));
    }
    Ok(id)
}

fn validate_value(value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation("refresh token value must not be blank"));
    }
    Ok(value)
}

fn validate_expiry_date(expiry_date: i64) -> Result<i64, DomainError> {
    if expiry_date <= 0 {
        return Err(DomainError::validation("refresh token expiry must be positive"));
    }
    Ok(expiry_date)
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Always `"Bearer"`
    pub grant_type: String,

    /// JWT access token
    pub access_token: String,

    /// Refresh token value
    pub refresh_token: String,

    /// Refresh token expiry in epoch milliseconds
    pub refresh_token_expiry: i64,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String, refresh_token_expiry: i64) -> Self {
        Self {
            grant_type: GRANT_TYPE.to_string(),
            access_token,
            refresh_token,
            refresh_token_expiry,
        }
    }
}
