use serde::{Deserialize, Serialize};

use vp_core::domain::entities::identity::{Identity, Role};

/// The caller's own principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalResponse {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            name: identity.name,
            role: identity.role,
            created_at: identity.created_at.to_rfc3339(),
        }
    }
}
