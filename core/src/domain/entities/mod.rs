//! Domain entities representing core business objects.

pub mod identity;
pub mod token;

#[cfg(test)]
mod tests;

pub use identity::{Identity, NewIdentity, Role};
pub use token::{
    AccessClaims, ExpiringClaims, RefreshClaims, RefreshToken, TokenPair,
    ACCESS_TOKEN_EXPIRY_SECONDS, GRANT_TYPE, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_SECONDS,
};
