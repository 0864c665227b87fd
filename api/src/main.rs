use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use vp_api::app::{create_app, AppState};
use vp_core::repositories::{IdentityRepository, RefreshTokenRepository};
use vp_core::services::{
    RequestAuthenticator, SessionAuthenticator, SigningKey, TokenCodec, TokenIssuer,
    TokenServiceConfig,
};
use vp_infra::{
    BcryptPasswordHasher, DatabasePool, InMemoryIdentityRepository,
    InMemoryRefreshTokenRepository, MySqlIdentityRepository, MySqlRefreshTokenRepository,
};
use vp_shared::{AppConfig, Environment, ServerConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
    init_tracing(&config.environment);

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid configuration")?;

    tracing::info!(
        environment = %config.environment,
        storage = ?config.storage,
        "Starting VoicePocket API server"
    );
    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("JWT_SECRET not set, using the development secret");
    }

    // The signing key is derived once and shared read-only from here on
    let key = SigningKey::from_secret(&config.auth.jwt.secret)?;
    let codec = Arc::new(TokenCodec::new(key, &config.auth.jwt.issuer));
    let issuer = Arc::new(TokenIssuer::new(
        Arc::clone(&codec),
        TokenServiceConfig::try_from(&config.auth.jwt)?,
    )?);

    match config.storage {
        StorageBackend::Mysql => {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("failed to connect to database")?;
            pool.run_migrations().await?;

            let identities = Arc::new(MySqlIdentityRepository::new(pool.get_pool().clone()));
            let refresh_tokens =
                Arc::new(MySqlRefreshTokenRepository::new(pool.get_pool().clone()));
            serve(&config.server, codec, issuer, identities, refresh_tokens).await?;
            pool.close().await;
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; all accounts are lost on restart");
            let identities = Arc::new(InMemoryIdentityRepository::new());
            let refresh_tokens = Arc::new(InMemoryRefreshTokenRepository::new());
            serve(&config.server, codec, issuer, identities, refresh_tokens).await?;
        }
    }

    Ok(())
}

fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn serve<I, R>(
    server: &ServerConfig,
    codec: Arc<TokenCodec>,
    issuer: Arc<TokenIssuer>,
    identities: Arc<I>,
    refresh_tokens: Arc<R>,
) -> anyhow::Result<()>
where
    I: IdentityRepository + 'static,
    R: RefreshTokenRepository + 'static,
{
    let authenticator: Arc<dyn RequestAuthenticator> =
        Arc::new(SessionAuthenticator::new(codec, Arc::clone(&identities)));
    let state = web::Data::new(AppState::new(
        identities,
        refresh_tokens,
        Arc::new(BcryptPasswordHasher::new()),
        issuer,
    ));

    let bind_address = server.bind_address();
    tracing::info!(%bind_address, "Server will bind");

    let mut http = HttpServer::new(move || {
        create_app(state.clone(), Arc::clone(&authenticator)).wrap(TracingLogger::default())
    });
    // 0 keeps actix's default of one worker per core
    if server.workers > 0 {
        http = http.workers(server.workers);
    }

    http.bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
