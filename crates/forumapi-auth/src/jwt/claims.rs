//! JWT claims structure shared by access and refresh tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use forumapi_core::error::AppError;
use forumapi_core::result::AppResult;
use forumapi_core::types::TokenPayload;

/// Claims embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity carried by the token.
    #[serde(flatten)]
    pub payload: TokenPayload,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch). Absent on refresh tokens
    /// issued without a configured lifetime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Unique token ID, so two tokens issued in the same second differ.
    pub jti: Uuid,
}

impl Claims {
    /// Builds claims issued now, expiring after `ttl` when given.
    ///
    /// Fails with a configuration error when `now + ttl` is not a
    /// representable timestamp.
    pub fn issue(payload: &TokenPayload, ttl: Option<Duration>) -> AppResult<Self> {
        let now = Utc::now();
        let exp = ttl
            .map(|ttl| {
                now.checked_add_signed(ttl)
                    .map(|at| at.timestamp())
                    .ok_or_else(|| AppError::configuration("Token lifetime is out of range"))
            })
            .transpose()?;

        Ok(Self {
            payload: payload.clone(),
            iat: now.timestamp(),
            exp,
            jti: Uuid::new_v4(),
        })
    }
}
