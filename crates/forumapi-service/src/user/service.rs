//! User registration.

use std::sync::Arc;

use tracing::info;

use forumapi_core::result::AppResult;
use forumapi_core::traits::{PasswordHash, UserRepository};
use forumapi_entity::user::{NewUser, RegisterUser, RegisteredUser};

/// Handles account creation.
#[derive(Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: Arc<dyn PasswordHash>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHash>) -> Self {
        Self { user_repo, hasher }
    }

    /// Registers a new user from an already validated payload.
    ///
    /// Fails with [`ErrorKind::Conflict`](forumapi_core::ErrorKind::Conflict)
    /// when the username is taken.
    pub async fn register(&self, req: &RegisterUser) -> AppResult<RegisteredUser> {
        self.user_repo
            .verify_available_username(&req.username)
            .await?;

        let password_hash = self.hasher.hash(&req.password)?;

        let user = self
            .user_repo
            .add_user(&NewUser {
                username: req.username.clone(),
                password_hash,
                fullname: req.fullname.clone(),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }
}
