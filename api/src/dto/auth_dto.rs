use serde::{Deserialize, Serialize};
use validator::Validate;

use vp_core::domain::entities::token::TokenPair;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReissueRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// Token pair as returned by login and reissue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub grant_type: String,
    pub access_token: String,
    pub refresh_token: String,
    /// Epoch milliseconds
    pub refresh_token_expiry: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            grant_type: pair.grant_type,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            refresh_token_expiry: pair.refresh_token_expiry,
        }
    }
}
