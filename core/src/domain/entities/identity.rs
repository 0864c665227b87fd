//! Identity entity as seen by the authentication subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authorization role of an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    /// Exact match only; role claims are machine-written.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Registered identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Numeric identity id, always positive
    pub id: i64,

    /// Login selector
    pub email: String,

    /// Display name
    pub name: String,

    /// Hashed credential
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: Role,

    pub created_at: DateTime<Utc>,
}

/// Identity about to be created; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewIdentity {
    /// Creates a new identity with the default `USER` role
    pub fn user(email: impl Into<String>, name: impl Into<String>, password_hash: String) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password_hash,
            role: Role::User,
        }
    }
}
