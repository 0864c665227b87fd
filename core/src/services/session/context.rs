//! Request-scoped authentication outcome

use crate::domain::value_objects::Principal;
use crate::errors::{AuthError, DomainError};

/// Result of authenticating one request.
///
/// Authentication never aborts the request; the context carries either the
/// principal or the failure to whichever stage decides on denial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    principal: Option<Principal>,
    failure: Option<DomainError>,
}

impl SessionContext {
    /// No credential was presented
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
            failure: None,
        }
    }

    pub fn failed(failure: DomainError) -> Self {
        Self {
            principal: None,
            failure: Some(failure),
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn failure(&self) -> Option<&DomainError> {
        self.failure.as_ref()
    }

    /// Returns the principal, or the recorded failure, or
    /// `AuthenticationRequired` when nothing was presented
    pub fn require(&self) -> Result<&Principal, DomainError> {
        if let Some(principal) = &self.principal {
            return Ok(principal);
        }
        Err(self
            .failure
            .clone()
            .unwrap_or(DomainError::Auth(AuthError::AuthenticationRequired)))
    }

    /// Like [`SessionContext::require`] but also demands the admin role
    pub fn require_admin(&self) -> Result<&Principal, DomainError> {
        let principal = self.require()?;
        if !principal.is_admin() {
            return Err(AuthError::AccessDenied.into());
        }
        Ok(principal)
    }
}
