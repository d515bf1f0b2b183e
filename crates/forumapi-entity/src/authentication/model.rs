//! Login/refresh payloads, the issued token pair, and the stored token row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use forumapi_core::result::AppResult;

use crate::payload::{ShapeMessages, string_fields};

/// Credentials submitted to `POST /authentications`.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserLogin {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl UserLogin {
    /// Builds a login payload, requiring string `username` and `password`.
    pub fn from_json(value: &Value) -> AppResult<Self> {
        let [username, password] = string_fields(
            value,
            ["username", "password"],
            ShapeMessages {
                missing: "Username and password are required",
                wrong_type: "Username and password must be strings",
            },
        )?;

        Ok(Self { username, password })
    }
}

impl std::fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Payload of `PUT` and `DELETE /authentications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshAuth {
    /// Refresh token issued at login.
    pub refresh_token: String,
}

impl RefreshAuth {
    /// Builds the payload, requiring a string `refreshToken`.
    pub fn from_json(value: &Value) -> AppResult<Self> {
        let [refresh_token] = string_fields(
            value,
            ["refreshToken"],
            ShapeMessages {
                missing: "Refresh token is required",
                wrong_type: "Refresh token must be a string",
            },
        )?;

        Ok(Self { refresh_token })
    }
}

/// Access/refresh token pair returned on login.
///
/// Only the refresh token is persisted; the access token is verified by
/// signature and expiry alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

/// A row of the `authentications` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredRefreshToken {
    /// Raw refresh token string.
    pub token: String,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}
