//! Application state and factory

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};

use vp_core::repositories::{IdentityRepository, RefreshTokenRepository};
use vp_core::services::{PasswordHasher, RequestAuthenticator, TokenIssuer, TokenLifecycleService};
use vp_shared::HealthResponse;

use crate::handlers::json_error_handler;
use crate::middleware::SessionAuth;
use crate::routes::{admin, auth, user};

/// Shared state handed to every handler
pub struct AppState<I, R, H>
where
    I: IdentityRepository,
    R: RefreshTokenRepository,
    H: PasswordHasher,
{
    /// Signup, login and reissue
    pub lifecycle: TokenLifecycleService<I, R, H>,
    /// Direct identity lookups for admin routes
    pub identities: Arc<I>,
}

impl<I, R, H> AppState<I, R, H>
where
    I: IdentityRepository,
    R: RefreshTokenRepository,
    H: PasswordHasher,
{
    pub fn new(
        identities: Arc<I>,
        refresh_tokens: Arc<R>,
        hasher: Arc<H>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            lifecycle: TokenLifecycleService::new(
                Arc::clone(&identities),
                refresh_tokens,
                hasher,
                issuer,
            ),
            identities,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<I, R, H>(
    app_state: web::Data<AppState<I, R, H>>,
    authenticator: Arc<dyn RequestAuthenticator>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    I: IdentityRepository + 'static,
    R: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Every request gets a session context; extractors decide on denial
        .wrap(SessionAuth::new(authenticator))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(auth::signup::<I, R, H>))
                        .route("/login", web::post().to(auth::login::<I, R, H>))
                        .route("/reissue", web::post().to(auth::reissue::<I, R, H>)),
                )
                .service(web::scope("/user").route("/me", web::get().to(user::me)))
                .service(
                    web::scope("/admin")
                        .route("/user/{id}", web::get().to(admin::get_user::<I, R, H>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "voicepocket-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
