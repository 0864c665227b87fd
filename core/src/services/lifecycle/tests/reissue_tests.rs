use std::sync::Arc;

use chrono::Duration;

use super::{email, fixture, issuer, t0, PASSWORD};
use crate::domain::entities::identity::Role;
use crate::domain::entities::token::{AccessClaims, RefreshToken};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::RefreshTokenRepository;

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[tokio::test]
async fn test_reissue_after_access_expiry() {
    let f = fixture(&[(42, Role::User)]).await;
    let p1 = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();
    assert_eq!(
        p1.refresh_token_expiry,
        (t0() + Duration::days(14)).timestamp_millis()
    );

    let at = t0() + Duration::hours(3);
    let p2 = f
        .service
        .reissue_at(&bearer(&p1.access_token), &p1.refresh_token, at)
        .await
        .unwrap();

    assert_eq!(p2.refresh_token, p1.refresh_token);
    assert_eq!(p2.refresh_token_expiry, p1.refresh_token_expiry);
    assert_ne!(p2.access_token, p1.access_token);

    let claims: AccessClaims = issuer(super::SECRET)
        .codec()
        .decode(&p2.access_token, at)
        .unwrap();
    assert_eq!(claims.exp, (t0() + Duration::hours(4)).timestamp());
    assert_eq!(claims.identity_id(), Ok(42));
    assert_eq!(claims.role(), Ok(Role::User));

    // No rotation: only the login wrote to the store
    assert_eq!(f.refresh_tokens.upsert_count(), 1);
}

#[tokio::test]
async fn test_reissue_can_repeat_with_same_refresh_token() {
    let f = fixture(&[(42, Role::User)]).await;
    let p1 = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();

    let p2 = f
        .service
        .reissue_at(&bearer(&p1.access_token), &p1.refresh_token, t0() + Duration::hours(2))
        .await
        .unwrap();
    let p3 = f
        .service
        .reissue_at(&bearer(&p2.access_token), &p1.refresh_token, t0() + Duration::hours(5))
        .await
        .unwrap();

    assert_eq!(p3.refresh_token, p1.refresh_token);
}

#[tokio::test]
async fn test_foreign_token_rejected_before_storage_lookup() {
    let f = fixture(&[(42, Role::User)]).await;
    let p1 = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();

    let forged = issuer("attacker-secret")
        .issue_access_token(42, Role::Admin, t0())
        .unwrap();

    let result = f
        .service
        .reissue_at(&bearer(&forged.token), &p1.refresh_token, t0())
        .await;

    assert_eq!(result, Err(DomainError::Token(TokenError::SignatureInvalid)));
    assert_eq!(f.refresh_tokens.find_count(), 0);
    assert_eq!(f.identities.lookup_count(), 0);
}

#[tokio::test]
async fn test_missing_bearer_prefix() {
    let f = fixture(&[(42, Role::User)]).await;
    let p1 = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();

    let result = f
        .service
        .reissue_at(&p1.access_token, &p1.refresh_token, t0())
        .await;
    assert_eq!(result, Err(DomainError::Token(TokenError::ModeInvalid)));
    assert_eq!(f.refresh_tokens.find_count(), 0);
}

#[tokio::test]
async fn test_mismatched_refresh_value() {
    let f = fixture(&[(42, Role::User)]).await;
    let p1 = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();

    let result = f
        .service
        .reissue_at(&bearer(&p1.access_token), "not-the-refresh-token", t0())
        .await;
    assert_eq!(result, Err(DomainError::Token(TokenError::RefreshTokenInvalid)));
}

#[tokio::test]
async fn test_no_stored_record() {
    let f = fixture(&[(42, Role::User)]).await;
    let access = issuer(super::SECRET)
        .issue_access_token(42, Role::User, t0())
        .unwrap();

    let result = f
        .service
        .reissue_at(&bearer(&access.token), "anything", t0())
        .await;
    assert_eq!(result, Err(DomainError::Token(TokenError::RefreshTokenInvalid)));
}

#[tokio::test]
async fn test_second_login_invalidates_first_refresh_token() {
    let f = fixture(&[(42, Role::User)]).await;
    let first = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();
    let second = f
        .service
        .login_at(&email(42), PASSWORD, t0() + Duration::minutes(1))
        .await
        .unwrap();

    let at = t0() + Duration::minutes(2);
    let stale = f
        .service
        .reissue_at(&bearer(&first.access_token), &first.refresh_token, at)
        .await;
    assert_eq!(stale, Err(DomainError::Token(TokenError::RefreshTokenInvalid)));

    let fresh = f
        .service
        .reissue_at(&bearer(&first.access_token), &second.refresh_token, at)
        .await;
    assert!(fresh.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_logins_leave_one_refresh_value() {
    let f = Arc::new(fixture(&[(7, Role::User)]).await);

    let a = {
        let f = Arc::clone(&f);
        tokio::spawn(async move { f.service.login_at(&email(7), PASSWORD, t0()).await })
    };
    let b = {
        let f = Arc::clone(&f);
        tokio::spawn(async move { f.service.login_at(&email(7), PASSWORD, t0()).await })
    };
    let a = a.await.unwrap().unwrap();
    let b = b.await.unwrap().unwrap();
    assert_ne!(a.refresh_token, b.refresh_token);

    let stored = f.refresh_tokens.find(7).await.unwrap().unwrap();
    let (winner, loser) = if stored.value() == a.refresh_token {
        (a, b)
    } else {
        assert_eq!(stored.value(), b.refresh_token);
        (b, a)
    };

    let ok = f
        .service
        .reissue_at(&bearer(&winner.access_token), &winner.refresh_token, t0())
        .await;
    assert!(ok.is_ok());

    let denied = f
        .service
        .reissue_at(&bearer(&loser.access_token), &loser.refresh_token, t0())
        .await;
    assert_eq!(denied, Err(DomainError::Token(TokenError::RefreshTokenInvalid)));
}

#[tokio::test]
async fn test_expired_refresh_record() {
    let f = fixture(&[(42, Role::User)]).await;
    let p1 = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();

    let result = f
        .service
        .reissue_at(
            &bearer(&p1.access_token),
            &p1.refresh_token,
            t0() + Duration::days(14),
        )
        .await;
    assert_eq!(result, Err(DomainError::Token(TokenError::RefreshTokenInvalid)));
}

#[tokio::test]
async fn test_identity_removed_after_login() {
    let f = fixture(&[(42, Role::User)]).await;
    let p1 = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();
    f.identities.remove(42).await;

    let result = f
        .service
        .reissue_at(&bearer(&p1.access_token), &p1.refresh_token, t0())
        .await;
    assert_eq!(result, Err(DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_reissue_uses_current_role() {
    let f = fixture(&[(42, Role::User)]).await;
    let p1 = f.service.login_at(&email(42), PASSWORD, t0()).await.unwrap();

    // Promote the identity and keep the stored refresh record
    f.identities.remove(42).await;
    f.identities
        .seed(crate::domain::entities::identity::Identity {
            id: 42,
            email: email(42),
            name: "Promoted".to_string(),
            password_hash: String::new(),
            role: Role::Admin,
            created_at: t0(),
        })
        .await;
    f.refresh_tokens
        .seed(RefreshToken::new(42, p1.refresh_token.clone(), p1.refresh_token_expiry).unwrap())
        .await;

    let p2 = f
        .service
        .reissue_at(&bearer(&p1.access_token), &p1.refresh_token, t0())
        .await
        .unwrap();
    let claims: AccessClaims = issuer(super::SECRET)
        .codec()
        .decode_ignoring_expiry(&p2.access_token)
        .unwrap();
    assert_eq!(claims.role(), Ok(Role::Admin));
}
