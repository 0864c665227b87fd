//! Error kinds for authentication and token handling
//!
//! Messages here are for logs. The presentation layer owns the wire codes and
//! the user-facing text.

use thiserror::Error;

/// Authentication and identity related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email login failed")]
    LoginFailed,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Access denied")]
    AccessDenied,
}

/// Token validation and issuance errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Authorization header missing the bearer scheme
    #[error("Invalid authorization mode")]
    ModeInvalid,

    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    SignatureInvalid,

    #[error("Token expired")]
    Expired,

    /// Authentic token without a recognized role claim
    #[error("Token carries no recognized role")]
    EntryPointDenied,

    /// No stored refresh token, or the supplied value does not match it
    #[error("Invalid refresh token")]
    RefreshTokenInvalid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Maps a `jsonwebtoken` failure onto the token error taxonomy.
    ///
    /// Only a failed signature check is `SignatureInvalid`; anything else the
    /// library rejects (segments, base64, JSON, algorithm, issuer) is
    /// `Malformed`.
    pub fn from_jwt(error: &jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match error.kind() {
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}
