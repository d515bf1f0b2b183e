//! Refresh token repository backed by the `authentications` table.

use async_trait::async_trait;
use sqlx::PgPool;

use forumapi_core::error::{AppError, ErrorKind};
use forumapi_core::result::AppResult;
use forumapi_core::traits::AuthenticationRepository;

/// Stores refresh tokens in PostgreSQL. Each operation is a single statement.
#[derive(Debug, Clone)]
pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    /// Create a new authentication repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    async fn add_token(&self, token: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add token", e))?;
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> AppResult<()> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM authentications WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up token", e))?;

        if !exists {
            return Err(AppError::token_not_found(
                "Refresh token is not registered in the database",
            ));
        }
        Ok(())
    }

    async fn delete_token(&self, token: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete token", e))?;

        tracing::debug!(rows = result.rows_affected(), "Refresh token deleted");
        Ok(())
    }
}
