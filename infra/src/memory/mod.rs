//! Process-local repositories.
//!
//! Used by the HTTP tests and by `STORAGE_BACKEND=memory` for local runs.
//! State is lost on restart.

mod identity;
mod refresh_token;


pub use identity::InMemoryIdentityRepository;
pub use refresh_token::InMemoryRefreshTokenRepository;
