pub mod identity;
pub mod refresh_token;

pub use identity::IdentityRepository;
pub use refresh_token::RefreshTokenRepository;

#[cfg(test)]
pub use identity::MockIdentityRepository;
#[cfg(test)]
pub use refresh_token::MockRefreshTokenRepository;
