//! MySQL implementation of the IdentityRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use vp_core::domain::entities::identity::{Identity, NewIdentity, Role};
use vp_core::errors::{AuthError, DomainError};
use vp_core::repositories::IdentityRepository;

/// MySQL implementation of IdentityRepository backed by the `users` table
pub struct MySqlIdentityRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlIdentityRepository {
    /// Create a new MySQL identity repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_identity(row: &sqlx::mysql::MySqlRow) -> Result<Identity, DomainError> {
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::internal(format!("Failed to get role: {}", e)))?;

        Ok(Identity {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            password_hash: row
                .try_get("password")
                .map_err(|e| DomainError::internal(format!("Failed to get password: {}", e)))?,
            role: role
                .parse::<Role>()
                .map_err(|e| DomainError::internal(format!("Invalid role in database: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
        })
    }

    async fn find_one(&self, query: &str, bind: QueryKey<'_>) -> Result<Option<Identity>, DomainError> {
        let query = sqlx::query(query);
        let query = match bind {
            QueryKey::Id(id) => query.bind(id),
            QueryKey::Email(email) => query.bind(email),
        };

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find identity: {}", e)))?;

        row.as_ref().map(Self::row_to_identity).transpose()
    }
}

enum QueryKey<'a> {
    Id(i64),
    Email(&'a str),
}

#[async_trait]
impl IdentityRepository for MySqlIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, DomainError> {
        let query = r#"
            SELECT id, email, name, password, role, created_at
            FROM users
            WHERE email = ?
        "#;
        self.find_one(query, QueryKey::Email(email)).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, DomainError> {
        let query = r#"
            SELECT id, email, name, password, role, created_at
            FROM users
            WHERE id = ?
        "#;
        self.find_one(query, QueryKey::Id(id)).await
    }

    async fn create(&self, identity: NewIdentity) -> Result<Identity, DomainError> {
        let created_at = Utc::now();
        let query = r#"
            INSERT INTO users (email, name, password, role, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&identity.email)
            .bind(&identity.name)
            .bind(&identity.password_hash)
            .bind(identity.role.as_str())
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::EmailAlreadyExists)
                }
                _ => DomainError::internal(format!("Failed to create identity: {}", e)),
            })?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|e| DomainError::internal(format!("Identity id out of range: {}", e)))?;

        Ok(Identity {
            id,
            email: identity.email,
            name: identity.name,
            password_hash: identity.password_hash,
            role: identity.role,
            created_at,
        })
    }
}
