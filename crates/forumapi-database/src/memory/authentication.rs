//! In-memory refresh token registry.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use forumapi_core::error::AppError;
use forumapi_core::result::AppResult;
use forumapi_core::traits::AuthenticationRepository;
use forumapi_entity::authentication::StoredRefreshToken;

/// Refresh token registry held behind a Tokio mutex.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuthenticationRepository {
    tokens: Arc<Mutex<Vec<StoredRefreshToken>>>,
}

impl MemoryAuthenticationRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, duplicates included.
    pub async fn len(&self) -> usize {
        self.tokens.lock().await.len()
    }

    /// Whether no token is stored.
    pub async fn is_empty(&self) -> bool {
        self.tokens.lock().await.is_empty()
    }
}

#[async_trait]
impl AuthenticationRepository for MemoryAuthenticationRepository {
    async fn add_token(&self, token: &str) -> AppResult<()> {
        self.tokens.lock().await.push(StoredRefreshToken {
            token: token.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> AppResult<()> {
        let tokens = self.tokens.lock().await;
        if tokens.iter().any(|row| row.token == token) {
            Ok(())
        } else {
            Err(AppError::token_not_found(
                "Refresh token is not registered in the database",
            ))
        }
    }

    async fn delete_token(&self, token: &str) -> AppResult<()> {
        self.tokens.lock().await.retain(|row| row.token != token);
        Ok(())
    }
}
