//! Account store trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Credential, NewUser, RegisteredUser};

/// Message used whenever a username is already registered.
pub const USERNAME_TAKEN: &str = "Username is not available";

/// Account store used by registration and credential verification.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Fail with [`ErrorKind::Conflict`](crate::ErrorKind::Conflict) if
    /// `username` is already taken.
    async fn verify_available_username(&self, username: &str) -> AppResult<()>;

    /// Insert a user and return its public view.
    async fn add_user(&self, user: &NewUser) -> AppResult<RegisteredUser>;

    /// Look up the stored password hash for `username`.
    async fn find_credential_by_username(&self, username: &str) -> AppResult<Option<Credential>>;
}
