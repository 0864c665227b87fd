//! Business services containing domain logic and use cases.

pub mod lifecycle;
pub mod password;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use lifecycle::TokenLifecycleService;
pub use password::PasswordHasher;
pub use session::{
    extract_bearer, RequestAuthenticator, SessionAuthenticator, SessionContext, BEARER_PREFIX,
};
pub use token::{SignedToken, SigningKey, TokenCodec, TokenIssuer, TokenServiceConfig};
