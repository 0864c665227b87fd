//! Admin-only routes

use actix_web::{web, HttpResponse};

use vp_core::errors::AuthError;
use vp_core::repositories::{IdentityRepository, RefreshTokenRepository};
use vp_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::user_dto::UserResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AdminContext;

/// Handler for GET /api/v1/admin/user/{id}
///
/// - 200 OK: the identity
/// - 400 Bad Request: no identity with this id
/// - 401 Unauthorized: caller is not an authenticated admin
pub async fn get_user<I, R, H>(
    admin: AdminContext,
    state: web::Data<AppState<I, R, H>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    I: IdentityRepository + 'static,
    R: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();
    tracing::info!(admin_id = admin.0.user_id, target_id = id, "Admin user lookup");

    match state.identities.find_by_id(id).await {
        Ok(Some(identity)) => HttpResponse::Ok().json(UserResponse::from(identity)),
        Ok(None) => handle_domain_error(AuthError::UserNotFound.into()),
        Err(error) => handle_domain_error(error),
    }
}
