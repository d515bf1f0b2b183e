//! Account values exchanged with the user store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored login secret for a username.
#[derive(Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Credential {
    /// Login name.
    pub username: String,
    /// Argon2 password hash.
    pub password_hash: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Data required to insert a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Full display name.
    pub fullname: String,
}

/// Public view of a newly registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    /// Assigned user ID.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Full display name.
    pub fullname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_hides_hash() {
        let credential = Credential {
            username: "dicoding".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };

        let rendered = format!("{credential:?}");
        assert!(rendered.contains("dicoding"));
        assert!(!rendered.contains("secret"));
    }
}
