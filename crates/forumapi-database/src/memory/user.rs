//! In-memory user store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use forumapi_core::error::AppError;
use forumapi_core::result::AppResult;
use forumapi_core::traits::{USERNAME_TAKEN, UserRepository};
use forumapi_entity::user::{Credential, NewUser, RegisteredUser, User};

/// Users keyed by username, held behind a Tokio mutex.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl MemoryUserRepository {
    /// Creates an empty user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn verify_available_username(&self, username: &str) -> AppResult<()> {
        if self.users.lock().await.contains_key(username) {
            return Err(AppError::conflict(USERNAME_TAKEN));
        }
        Ok(())
    }

    async fn add_user(&self, user: &NewUser) -> AppResult<RegisteredUser> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.username) {
            return Err(AppError::conflict(USERNAME_TAKEN));
        }

        let row = User {
            id: Uuid::new_v4(),
            username: user.username.clone(),
            password: user.password_hash.clone(),
            fullname: user.fullname.clone(),
            created_at: Utc::now(),
        };
        users.insert(row.username.clone(), row.clone());

        Ok(row.into())
    }

    async fn find_credential_by_username(&self, username: &str) -> AppResult<Option<Credential>> {
        Ok(self.users.lock().await.get(username).map(|user| Credential {
            username: user.username.clone(),
            password_hash: user.password.clone(),
        }))
    }
}
