//! Maps domain failures onto HTTP responses

use std::collections::HashMap;

use actix_web::{error::InternalError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use vp_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Stable wire code for a domain error
pub fn error_code(error: &DomainError) -> &'static str {
    match error {
        DomainError::Token(kind) => match kind {
            TokenError::ModeInvalid => "invalid_authorization_mode",
            TokenError::Malformed => "malformed_token",
            TokenError::SignatureInvalid => "invalid_token_signature",
            TokenError::Expired => "token_expired",
            TokenError::EntryPointDenied => "entry_point_denied",
            TokenError::RefreshTokenInvalid => "invalid_refresh_token",
            TokenError::TokenGenerationFailed => "token_generation_failed",
        },
        DomainError::Auth(kind) => match kind {
            AuthError::UserNotFound => "user_not_found",
            AuthError::LoginFailed => "login_failed",
            AuthError::EmailAlreadyExists => "email_already_exists",
            AuthError::AuthenticationRequired => "authentication_required",
            AuthError::AccessDenied => "access_denied",
        },
        DomainError::Validation { .. } => "validation_error",
        DomainError::Internal { .. } => "internal_error",
    }
}

/// HTTP status for a domain error
pub fn error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Token(TokenError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::UserNotFound | AuthError::EmailAlreadyExists) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::Auth(AuthError::LoginFailed) => StatusCode::CONFLICT,
        DomainError::Auth(AuthError::AuthenticationRequired | AuthError::AccessDenied) => {
            StatusCode::UNAUTHORIZED
        }
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn user_message(error: &DomainError) -> String {
    match error {
        DomainError::Token(TokenError::ModeInvalid) => {
            "Authorization header must use the Bearer scheme".to_string()
        }
        DomainError::Token(TokenError::Expired) => "Access token has expired".to_string(),
        DomainError::Token(TokenError::EntryPointDenied) => {
            "A valid access token is required to access this resource".to_string()
        }
        DomainError::Token(TokenError::RefreshTokenInvalid) => {
            "Refresh token is invalid. Please log in again".to_string()
        }
        DomainError::Token(TokenError::Malformed | TokenError::SignatureInvalid) => {
            "Access token is invalid".to_string()
        }
        DomainError::Auth(AuthError::LoginFailed) => {
            "Email or password does not match".to_string()
        }
        DomainError::Auth(AuthError::AccessDenied) => {
            "You do not have permission to access this resource".to_string()
        }
        DomainError::Validation { message } => message.clone(),
        // Internal details stay in the logs
        DomainError::Internal { .. } | DomainError::Token(TokenError::TokenGenerationFailed) => {
            "An internal error occurred".to_string()
        }
        DomainError::Auth(kind) => kind.to_string(),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = error_status(&error);
    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    ErrorResponse::new(error_code(&error), user_message(&error)).to_response(status)
}

/// Denial response for protected routes: every client-side failure is a
/// 401, keeping the specific error code in the body
pub fn handle_authentication_failure(error: DomainError) -> HttpResponse {
    let status = error_status(&error);
    if status.is_server_error() {
        return handle_domain_error(error);
    }

    tracing::debug!(error = %error, "Request not authenticated");
    ErrorResponse::new(error_code(&error), user_message(&error))
        .to_response(StatusCode::UNAUTHORIZED)
}

/// Renders `validator` failures as a 400 with per-field details
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let details: HashMap<String, serde_json::Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes: Vec<String> = errs.iter().map(|e| e.code.to_string()).collect();
            (field.to_string(), serde_json::json!(codes))
        })
        .collect();

    ErrorResponse::new("validation_error", "Request validation failed")
        .with_details(details)
        .to_response(StatusCode::BAD_REQUEST)
}

/// `JsonConfig` error handler: unparseable bodies become a 400 in the
/// standard error envelope
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response = ErrorResponse::new("invalid_request_body", err.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}
