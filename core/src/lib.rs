//! # VoicePocket Core
//!
//! Domain layer for the VoicePocket backend: token encoding and verification,
//! access/refresh issuance, per-request session authentication and the
//! login/reissue lifecycle. Storage and credential hashing are reached through
//! the repository and hasher traits defined here and implemented in `vp_infra`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AccessClaims, ExpiringClaims, Identity, NewIdentity, RefreshClaims, RefreshToken, Role,
    TokenPair,
};
pub use domain::value_objects::Principal;
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{IdentityRepository, RefreshTokenRepository};
pub use services::{
    extract_bearer, PasswordHasher, RequestAuthenticator, SessionAuthenticator, SessionContext,
    SignedToken, SigningKey, TokenCodec, TokenIssuer, TokenLifecycleService, TokenServiceConfig,
};
