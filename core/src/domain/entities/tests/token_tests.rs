//! Unit tests for token entities

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::identity::Role;
use crate::domain::entities::token::{
    AccessClaims, ExpiringClaims, RefreshClaims, RefreshToken, TokenPair,
    ACCESS_TOKEN_EXPIRY_SECONDS, GRANT_TYPE, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_SECONDS,
};
use crate::errors::{DomainError, TokenError};

#[test]
fn test_access_claims_window() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let claims = AccessClaims::new(
        7,
        Role::User,
        JWT_ISSUER,
        now,
        Duration::seconds(ACCESS_TOKEN_EXPIRY_SECONDS),
    );

    assert_eq!(claims.sub, "7");
    assert_eq!(claims.role.as_deref(), Some("USER"));
    assert_eq!(claims.iat, now.timestamp());
    assert_eq!(claims.exp, now.timestamp() + 3600);
    assert_eq!(claims.identity_id(), Ok(7));
    assert_eq!(claims.role(), Ok(Role::User));

    assert!(!claims.is_expired_at(now));
    assert!(!claims.is_expired_at(now + Duration::seconds(3599)));
    assert!(claims.is_expired_at(now + Duration::seconds(3600)));
}

#[test]
fn test_access_claims_bad_subject() {
    let now = Utc::now();
    let mut claims = AccessClaims::new(1, Role::Admin, JWT_ISSUER, now, Duration::hours(1));

    claims.sub = "abc".to_string();
    assert_eq!(claims.identity_id(), Err(TokenError::Malformed));

    claims.sub = "0".to_string();
    assert_eq!(claims.identity_id(), Err(TokenError::Malformed));

    claims.sub = "-3".to_string();
    assert_eq!(claims.identity_id(), Err(TokenError::Malformed));
}

#[test]
fn test_access_claims_missing_or_unknown_role() {
    let now = Utc::now();
    let mut claims = AccessClaims::new(1, Role::Admin, JWT_ISSUER, now, Duration::hours(1));
    assert_eq!(claims.role(), Ok(Role::Admin));

    claims.role = None;
    assert_eq!(claims.role(), Err(TokenError::EntryPointDenied));

    claims.role = Some("ROOT".to_string());
    assert_eq!(claims.role(), Err(TokenError::EntryPointDenied));
}

#[test]
fn test_access_claims_omits_absent_role() {
    let now = Utc::now();
    let mut claims = AccessClaims::new(1, Role::User, JWT_ISSUER, now, Duration::hours(1));
    claims.role = None;

    let json = serde_json::to_value(&claims).unwrap();
    assert!(json.get("role").is_none());
}

#[test]
fn test_refresh_claims_are_unique() {
    let now = Utc::now();
    let ttl = Duration::seconds(REFRESH_TOKEN_EXPIRY_SECONDS);
    let first = RefreshClaims::new(JWT_ISSUER, now, ttl);
    let second = RefreshClaims::new(JWT_ISSUER, now, ttl);

    assert_eq!(first.exp, now.timestamp() + 14 * 24 * 3600);
    assert_eq!(first.iat, second.iat);
    assert_ne!(first.jti, second.jti);
}

#[test]
fn test_refresh_token_record_validation() {
    assert!(RefreshToken::new(1, "value", 1).is_ok());

    assert!(matches!(
        RefreshToken::new(0, "value", 1),
        Err(DomainError::Validation { .. })
    ));
    assert!(matches!(
        RefreshToken::new(1, "   ", 1),
        Err(DomainError::Validation { .. })
    ));
    assert!(matches!(
        RefreshToken::new(1, "value", 0),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_refresh_token_update() {
    let mut record = RefreshToken::new(3, "old", 1_000).unwrap();

    record.update_token("new", 2_000).unwrap();
    assert_eq!(record.id(), 3);
    assert_eq!(record.value(), "new");
    assert_eq!(record.expiry_date(), 2_000);

    // Rejected updates leave the record untouched
    assert!(record.update_token("", 3_000).is_err());
    assert!(record.update_token("newer", -1).is_err());
    assert_eq!(record.value(), "new");
    assert_eq!(record.expiry_date(), 2_000);
}

#[test]
fn test_refresh_token_matches() {
    let record = RefreshToken::new(3, "abc.def.ghi", 1_000).unwrap();

    assert!(record.matches("abc.def.ghi"));
    assert!(!record.matches("abc.def.gh"));
    assert!(!record.matches("abc.def.ghi "));
    assert!(!record.matches(""));
}

#[test]
fn test_refresh_token_expiry() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let record = RefreshToken::new(3, "v", now.timestamp_millis()).unwrap();

    assert!(!record.is_expired_at(now - Duration::milliseconds(1)));
    assert!(record.is_expired_at(now));
}

#[test]
fn test_token_pair_serialization() {
    let pair = TokenPair::new("a".to_string(), "r".to_string(), 42);
    assert_eq!(pair.grant_type, GRANT_TYPE);

    let json = serde_json::to_value(&pair).unwrap();
    assert_eq!(json["grant_type"], "Bearer");
    assert_eq!(json["refresh_token_expiry"], 42);
}
