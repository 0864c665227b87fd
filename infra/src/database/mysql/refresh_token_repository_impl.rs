//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! One row per identity in `refresh_token`, keyed by the identity id.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use vp_core::domain::entities::token::RefreshToken;
use vp_core::errors::DomainError;
use vp_core::repositories::RefreshTokenRepository;

/// MySQL implementation of RefreshTokenRepository
pub struct MySqlRefreshTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    /// Create a new MySQL refresh token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let value: String = row
            .try_get("token")
            .map_err(|e| DomainError::internal(format!("Failed to get token: {}", e)))?;
        let expiry_date: i64 = row
            .try_get("expiry_date")
            .map_err(|e| DomainError::internal(format!("Failed to get expiry_date: {}", e)))?;

        RefreshToken::new(id, value, expiry_date)
    }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn upsert(
        &self,
        identity_id: i64,
        value: &str,
        expiry_date: i64,
    ) -> Result<RefreshToken, DomainError> {
        // Validate before touching the row
        let token = RefreshToken::new(identity_id, value, expiry_date)?;

        let query = r#"
            INSERT INTO refresh_token (id, token, expiry_date)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                token = VALUES(token),
                expiry_date = VALUES(expiry_date)
        "#;

        sqlx::query(query)
            .bind(token.id())
            .bind(token.value())
            .bind(token.expiry_date())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to upsert refresh token: {}", e)))?;

        Ok(token)
    }

    async fn find(&self, identity_id: i64) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, token, expiry_date
            FROM refresh_token
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(identity_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find refresh token: {}", e)))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }
}
