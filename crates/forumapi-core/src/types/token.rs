//! Identity payload embedded in access and refresh tokens.

use serde::{Deserialize, Serialize};

/// The claim set both token kinds carry.
///
/// Decoding it recovers the caller's identity without a round-trip to the
/// user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Username of the authenticated user.
    pub username: String,
}

impl TokenPayload {
    /// Creates a payload for the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
