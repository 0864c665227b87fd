use actix_web::{web, HttpResponse};
use validator::Validate;

use vp_core::repositories::{IdentityRepository, RefreshTokenRepository};
use vp_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::auth_dto::{SignupRequest, SignupResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/signup
///
/// # Request Body
///
/// ```json
/// { "email": "sample@gmail.com", "password": "sample!", "name": "sample" }
/// ```
///
/// # Response
///
/// - 200 OK: `{ "id": 1 }`
/// - 400 Bad Request: invalid body or email already registered
pub async fn signup<I, R, H>(
    state: web::Data<AppState<I, R, H>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    I: IdentityRepository + 'static,
    R: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .lifecycle
        .signup(&request.email, &request.name, &request.password)
        .await
    {
        Ok(identity) => HttpResponse::Ok().json(SignupResponse { id: identity.id }),
        Err(error) => handle_domain_error(error),
    }
}
