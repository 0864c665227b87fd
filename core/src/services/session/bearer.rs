//! Authorization header parsing

use crate::errors::TokenError;

/// Scheme prefix required on every credential header
pub const BEARER_PREFIX: &str = "Bearer ";

/// Strips the bearer scheme from an `Authorization` header value
///
/// # Errors
///
/// `TokenError::ModeInvalid` if the prefix is missing or nothing follows it
pub fn extract_bearer(header: &str) -> Result<&str, TokenError> {
    match header.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(TokenError::ModeInvalid),
    }
}
