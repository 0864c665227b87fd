//! Request-time session authentication

pub mod authenticator;
pub mod bearer;
pub mod context;

#[cfg(test)]
mod tests;

pub use authenticator::{RequestAuthenticator, SessionAuthenticator};
pub use bearer::{extract_bearer, BEARER_PREFIX};
pub use context::SessionContext;
