//! Authentication token configuration.

use serde::{Deserialize, Serialize};

/// Longest lifetime accepted for either token kind: 100 years, in hours.
pub const MAX_TOKEN_LIFETIME_HOURS: u64 = 100 * 8766;

/// Secrets and lifetimes for access and refresh tokens.
///
/// Access and refresh tokens are signed with independent keys.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 key for access tokens.
    #[serde(default)]
    pub access_token_key: String,
    /// HMAC-SHA256 key for refresh tokens.
    #[serde(default)]
    pub refresh_token_key: String,
    /// Access token lifetime in seconds.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_seconds: u64,
    /// Refresh token lifetime in hours. When unset, refresh tokens carry no
    /// `exp` claim and live until they are revoked.
    #[serde(default)]
    pub refresh_token_ttl_hours: Option<u64>,
    /// Clock skew tolerated when checking `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token_key", &"****")
            .field("refresh_token_key", &"****")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("refresh_token_ttl_hours", &self.refresh_token_ttl_hours)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_key: String::new(),
            refresh_token_key: String::new(),
            access_token_ttl_seconds: default_access_ttl(),
            refresh_token_ttl_hours: None,
            leeway_seconds: default_leeway(),
        }
    }
}

fn default_access_ttl() -> u64 {
    3000
}

fn default_leeway() -> u64 {
    5
}
