//! Tests for token signing and issuance


use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use super::{SigningKey, TokenCodec, TokenIssuer, TokenServiceConfig};

pub(crate) const TEST_SECRET: &str = "test-secret-key-for-token-tests";

pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub(crate) fn test_codec(secret: &str) -> Arc<TokenCodec> {
    let key = SigningKey::from_secret(secret).unwrap();
    Arc::new(TokenCodec::new(key, &TokenServiceConfig::default().issuer))
}

pub(crate) fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(test_codec(TEST_SECRET), TokenServiceConfig::default()).unwrap()
}
