//! Bearer token session middleware and the authorization-denial extractors.
//!
//! `SessionAuth` runs the request authenticator on every request and stores
//! the resulting [`SessionContext`] in the request extensions. It never
//! rejects a request itself. Handlers that need an identity take an
//! [`AuthContext`] or [`AdminContext`] argument, and those extractors turn a
//! missing principal into the 401 response.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use vp_core::domain::entities::identity::Role;
use vp_core::domain::value_objects::Principal;
use vp_core::errors::DomainError;
use vp_core::services::session::{RequestAuthenticator, SessionContext};

use crate::handlers::handle_authentication_failure;

/// Authenticated caller injected into handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Identity id
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

impl From<&Principal> for AuthContext {
    fn from(principal: &Principal) -> Self {
        Self {
            user_id: principal.id,
            email: principal.email.clone(),
            role: principal.role,
        }
    }
}

/// Authenticated caller holding the `ADMIN` role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext(pub AuthContext);

/// Session middleware factory
#[derive(Clone)]
pub struct SessionAuth {
    authenticator: Arc<dyn RequestAuthenticator>,
}

impl SessionAuth {
    /// Creates the middleware around a shared authenticator
    pub fn new(authenticator: Arc<dyn RequestAuthenticator>) -> Self {
        Self { authenticator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            authenticator: Arc::clone(&self.authenticator),
        }))
    }
}

/// Session middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    authenticator: Arc<dyn RequestAuthenticator>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticator = Arc::clone(&self.authenticator);

        Box::pin(async move {
            let header = authorization_header(&req);
            let session = authenticator.authenticate(header.as_deref()).await;

            req.extensions_mut().insert(session);
            service.call(req).await
        })
    }
}

/// Raw `Authorization` header value. A header that is not visible ASCII is
/// passed on as empty so it fails the scheme check.
fn authorization_header(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default().to_string())
}

fn deny(error: DomainError) -> Error {
    let response = handle_authentication_failure(error.clone());
    InternalError::from_response(error, response).into()
}

fn session_of(req: &HttpRequest) -> SessionContext {
    req.extensions()
        .get::<SessionContext>()
        .cloned()
        .unwrap_or_default()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let session = session_of(req);
        ready(session.require().map(AuthContext::from).map_err(deny))
    }
}

/// Extractor for admin-only endpoints
impl FromRequest for AdminContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let session = session_of(req);
        ready(
            session
                .require_admin()
                .map(|principal| AdminContext(AuthContext::from(principal)))
                .map_err(deny),
        )
    }
}
