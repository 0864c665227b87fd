//! HS256 signing key material

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::DomainError;

/// Symmetric signing key, derived once at startup and never mutated.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Derives the key pair from a shared secret
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if the secret is empty
    pub fn from_secret(secret: &str) -> Result<Self, DomainError> {
        if secret.is_empty() {
            return Err(DomainError::validation("JWT secret must not be empty"));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
