//! Tests for the session lifecycle service

mod reissue_tests;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::identity::{Identity, Role};
use crate::domain::entities::token::JWT_ISSUER;
use crate::errors::DomainError;
use crate::repositories::{MockIdentityRepository, MockRefreshTokenRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::{SigningKey, TokenCodec, TokenIssuer, TokenServiceConfig};

use super::TokenLifecycleService;

pub(crate) const SECRET: &str = "lifecycle-test-secret";
pub(crate) const PASSWORD: &str = "correct horse";

/// Reversible stand-in for bcrypt
pub(crate) struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("plain:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("plain:{}", password))
    }
}

pub(crate) type TestService =
    TokenLifecycleService<MockIdentityRepository, MockRefreshTokenRepository, PlainHasher>;

pub(crate) struct Fixture {
    pub service: TestService,
    pub identities: Arc<MockIdentityRepository>,
    pub refresh_tokens: Arc<MockRefreshTokenRepository>,
}

pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

pub(crate) fn email(id: i64) -> String {
    format!("user{}@voicepocket.io", id)
}

pub(crate) fn issuer(secret: &str) -> Arc<TokenIssuer> {
    let codec = Arc::new(TokenCodec::new(
        SigningKey::from_secret(secret).unwrap(),
        JWT_ISSUER,
    ));
    Arc::new(TokenIssuer::new(codec, TokenServiceConfig::default()).unwrap())
}

pub(crate) async fn fixture(seed: &[(i64, Role)]) -> Fixture {
    let identities = Arc::new(MockIdentityRepository::new());
    for (id, role) in seed {
        identities
            .seed(Identity {
                id: *id,
                email: email(*id),
                name: format!("User {}", id),
                password_hash: format!("plain:{}", PASSWORD),
                role: *role,
                created_at: t0(),
            })
            .await;
    }

    let refresh_tokens = Arc::new(MockRefreshTokenRepository::new());
    let service = TokenLifecycleService::new(
        Arc::clone(&identities),
        Arc::clone(&refresh_tokens),
        Arc::new(PlainHasher),
        issuer(SECRET),
    );

    Fixture {
        service,
        identities,
        refresh_tokens,
    }
}
