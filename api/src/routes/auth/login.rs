use actix_web::{web, HttpResponse};
use validator::Validate;

use vp_core::repositories::{IdentityRepository, RefreshTokenRepository};
use vp_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::auth_dto::{LoginRequest, TokenResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "email": "sample@gmail.com", "password": "sample!" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "grantType": "Bearer",
///     "accessToken": "eyJ...",
///     "refreshToken": "eyJ...",
///     "refreshTokenExpiry": 1700000000000
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: unknown account or invalid body
/// - 409 Conflict: password mismatch
pub async fn login<I, R, H>(
    state: web::Data<AppState<I, R, H>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    I: IdentityRepository + 'static,
    R: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.lifecycle.login(&request.email, &request.password).await {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
