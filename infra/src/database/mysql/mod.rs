//! MySQL repository implementations

mod identity_repository_impl;
mod refresh_token_repository_impl;

pub use identity_repository_impl::MySqlIdentityRepository;
pub use refresh_token_repository_impl::MySqlRefreshTokenRepository;
