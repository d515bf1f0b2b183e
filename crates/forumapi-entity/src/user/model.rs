//! User entity model and registration payload.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use forumapi_core::error::AppError;
use forumapi_core::result::AppResult;
use forumapi_core::types::RegisteredUser;

use crate::payload::{ShapeMessages, string_fields};

/// A registered user as stored in the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password: String,
    /// Full display name.
    pub fullname: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            fullname: user.fullname,
        }
    }
}

/// Body of `POST /users`.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUser {
    /// Desired username.
    #[validate(
        length(
            max = 50,
            message = "Cannot create a new user because the username exceeds 50 characters"
        ),
        custom(function = "validate_username_charset")
    )]
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Full display name.
    pub fullname: String,
}

impl RegisterUser {
    /// Builds and validates a registration payload.
    pub fn from_json(value: &Value) -> AppResult<Self> {
        let [username, password, fullname] = string_fields(
            value,
            ["username", "password", "fullname"],
            ShapeMessages {
                missing: "Cannot create a new user because a required property is missing",
                wrong_type: "Cannot create a new user because a property has the wrong data type",
            },
        )?;

        let payload = Self {
            username,
            password,
            fullname,
        };

        payload.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Cannot create a new user because the payload is invalid".into());
            AppError::validation(message)
        })?;

        Ok(payload)
    }
}

impl std::fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUser")
            .field("username", &self.username)
            .field("password", &"****")
            .field("fullname", &self.fullname)
            .finish()
    }
}

/// Usernames may only contain ASCII letters, digits and underscores.
fn validate_username_charset(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Ok(());
    }

    Err(ValidationError::new("username_charset").with_message(Cow::Borrowed(
        "Cannot create a new user because the username contains forbidden characters",
    )))
}
