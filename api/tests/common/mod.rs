//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::Utc;

use vp_api::app::AppState;
use vp_core::domain::entities::identity::{Identity, Role};
use vp_core::services::{
    PasswordHasher, RequestAuthenticator, SessionAuthenticator, SigningKey, TokenCodec,
    TokenIssuer, TokenServiceConfig,
};
use vp_infra::{BcryptPasswordHasher, InMemoryIdentityRepository, InMemoryRefreshTokenRepository};

pub const SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "sample-password!";

pub type TestState =
    AppState<InMemoryIdentityRepository, InMemoryRefreshTokenRepository, BcryptPasswordHasher>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub authenticator: Arc<dyn RequestAuthenticator>,
    pub issuer: Arc<TokenIssuer>,
    pub identities: Arc<InMemoryIdentityRepository>,
}

pub fn issuer(secret: &str) -> Arc<TokenIssuer> {
    let codec = Arc::new(TokenCodec::new(
        SigningKey::from_secret(secret).unwrap(),
        &TokenServiceConfig::default().issuer,
    ));
    Arc::new(TokenIssuer::new(codec, TokenServiceConfig::default()).unwrap())
}

pub fn context() -> TestContext {
    let issuer = issuer(SECRET);
    let codec = Arc::new(TokenCodec::new(
        SigningKey::from_secret(SECRET).unwrap(),
        &TokenServiceConfig::default().issuer,
    ));
    let identities = Arc::new(InMemoryIdentityRepository::new());
    let authenticator: Arc<dyn RequestAuthenticator> =
        Arc::new(SessionAuthenticator::new(codec, Arc::clone(&identities)));

    let state = web::Data::new(AppState::new(
        Arc::clone(&identities),
        Arc::new(InMemoryRefreshTokenRepository::new()),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
        Arc::clone(&issuer),
    ));

    TestContext {
        state,
        authenticator,
        issuer,
        identities,
    }
}

/// Inserts an identity whose password is [`PASSWORD`]
pub async fn seed_identity(ctx: &TestContext, id: i64, email: &str, role: Role) {
    let password_hash = BcryptPasswordHasher::with_cost(4).hash(PASSWORD).await.unwrap();
    ctx.identities
        .insert(Identity {
            id,
            email: email.to_string(),
            name: format!("User {}", id),
            password_hash,
            role,
            created_at: Utc::now(),
        })
        .await;
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
