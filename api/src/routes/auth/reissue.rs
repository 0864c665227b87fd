use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};
use validator::Validate;

use vp_core::errors::TokenError;
use vp_core::repositories::{IdentityRepository, RefreshTokenRepository};
use vp_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::auth_dto::{ReissueRequest, TokenResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/reissue
///
/// Exchanges a possibly expired access token and the current refresh token
/// for a new access token. The refresh token is returned unchanged.
///
/// # Headers
///
/// `Authorization: Bearer <access token>`
///
/// # Request Body
///
/// ```json
/// { "refreshToken": "eyJ..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: any access or refresh token validation failure
/// - 400 Bad Request: the account no longer exists
pub async fn reissue<I, R, H>(
    state: web::Data<AppState<I, R, H>>,
    req: HttpRequest,
    request: web::Json<ReissueRequest>,
) -> HttpResponse
where
    I: IdentityRepository + 'static,
    R: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let Some(authorization) = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        return handle_domain_error(TokenError::ModeInvalid.into());
    };

    match state
        .lifecycle
        .reissue(authorization, &request.refresh_token)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
