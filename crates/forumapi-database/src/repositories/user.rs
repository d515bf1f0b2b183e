//! PostgreSQL user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use forumapi_core::error::{AppError, ErrorKind};
use forumapi_core::result::AppResult;
use forumapi_core::traits::{USERNAME_TAKEN, UserRepository};
use forumapi_entity::user::{Credential, NewUser, RegisteredUser, User};

/// Repository for the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn verify_available_username(&self, username: &str) -> AppResult<()> {
        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check username", e)
                })?;

        if taken {
            return Err(AppError::conflict(USERNAME_TAKEN));
        }
        Ok(())
    }

    async fn add_user(&self, user: &NewUser) -> AppResult<RegisteredUser> {
        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, password, fullname) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict(USERNAME_TAKEN)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;

        Ok(row.into())
    }

    async fn find_credential_by_username(&self, username: &str) -> AppResult<Option<Credential>> {
        sqlx::query_as::<_, Credential>(
            "SELECT username, password AS password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
        })
    }
}
