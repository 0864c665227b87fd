//! Routes for the authenticated caller

use actix_web::HttpResponse;

use crate::dto::user_dto::PrincipalResponse;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/user/me
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(PrincipalResponse {
        id: auth.user_id,
        email: auth.email,
        role: auth.role,
    })
}
