//! Compact JWT encoding and verification

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::token::ExpiringClaims;
use crate::errors::TokenError;

use super::key::SigningKey;

/// Signs and verifies claim sets with a single HS256 key.
///
/// Expiry is checked against a caller-supplied clock rather than inside
/// `jsonwebtoken`, so the strict and lenient paths share one `Validation`.
#[derive(Debug)]
pub struct TokenCodec {
    key: SigningKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec that requires `issuer` on every decoded token
    pub fn new(key: SigningKey, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;

        Self { key, validation }
    }

    /// Signs `claims`. Identical claims always produce the identical token.
    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, self.key.encoding_key()).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            TokenError::TokenGenerationFailed
        })
    }

    /// Verifies structure, signature and issuer, then rejects the token if
    /// `now` is at or past its expiry
    ///
    /// # Errors
    ///
    /// * `Malformed` - not a parseable token for this issuer
    /// * `SignatureInvalid` - signature does not verify
    /// * `Expired` - `now >= exp`
    pub fn decode<C>(&self, token: &str, now: DateTime<Utc>) -> Result<C, TokenError>
    where
        C: DeserializeOwned + ExpiringClaims,
    {
        let claims: C = self.decode_ignoring_expiry(token)?;
        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Same checks as [`TokenCodec::decode`] minus the expiry check
    pub fn decode_ignoring_expiry<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        decode::<C>(token, self.key.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::from_jwt(&e))
    }
}
