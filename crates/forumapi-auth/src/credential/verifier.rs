//! Checks a username/password pair against the user store.

use std::sync::Arc;

use tracing::debug;

use forumapi_core::error::AppError;
use forumapi_core::result::AppResult;
use forumapi_core::traits::PasswordHash;
use forumapi_core::traits::UserRepository;

/// Returned for both unknown usernames and wrong passwords.
pub const INVALID_CREDENTIALS: &str = "The credentials you entered do not match";

/// Verifies login credentials.
///
/// An unknown username and a wrong password fail with the same
/// [`ErrorKind::Authentication`](forumapi_core::ErrorKind::Authentication)
/// error, so callers cannot probe for registered usernames.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHash>,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier").finish_non_exhaustive()
    }
}

impl CredentialVerifier {
    /// Creates a verifier over a user store and a password hasher.
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHash>) -> Self {
        Self { users, hasher }
    }

    /// Succeeds only if `username` exists and `password` matches its hash.
    pub async fn verify_credential(&self, username: &str, password: &str) -> AppResult<()> {
        let Some(credential) = self.users.find_credential_by_username(username).await? else {
            debug!(username = %username, "Login rejected: unknown username");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.compare(password, &credential.password_hash)? {
            debug!(username = %username, "Login rejected: password mismatch");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        Ok(())
    }
}
