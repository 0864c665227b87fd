//! Token signing, verification and issuance

pub mod codec;
pub mod config;
pub mod issuer;
pub mod key;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use issuer::{SignedToken, TokenIssuer};
pub use key::SigningKey;
