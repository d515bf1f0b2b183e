//! HS256 token manager with independent access and refresh keys.

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, dangerous, decode, encode,
};

use forumapi_core::config::AuthConfig;
use forumapi_core::error::{AppError, ErrorKind};
use forumapi_core::result::AppResult;
use forumapi_core::traits::TokenManager;
use forumapi_core::types::TokenPayload;

use super::claims::Claims;

/// Signs access and refresh tokens and verifies refresh tokens.
///
/// A compromised access key cannot forge refresh tokens and vice versa.
#[derive(Clone)]
pub struct JwtTokenManager {
    /// Access token signing key. `None` when no key is configured.
    access_key: Option<EncodingKey>,
    /// Refresh token signing key. `None` when no key is configured.
    refresh_key: Option<EncodingKey>,
    /// Refresh token verification key.
    refresh_decoding_key: Option<DecodingKey>,
    /// Signature and expiry rules for refresh tokens.
    refresh_validation: Validation,
    /// Access token lifetime in seconds.
    access_ttl_seconds: u64,
    /// Refresh token lifetime in hours, if refresh tokens expire at all.
    refresh_ttl_hours: Option<u64>,
}

impl std::fmt::Debug for JwtTokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenManager")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish_non_exhaustive()
    }
}

impl JwtTokenManager {
    /// Creates a token manager from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let secret = |key: &str| (!key.is_empty()).then(|| key.as_bytes().to_vec());
        let access_secret = secret(&config.access_token_key);
        let refresh_secret = secret(&config.refresh_token_key);

        let mut refresh_validation = Validation::new(Algorithm::HS256);
        // `exp` is only present when a refresh lifetime is configured.
        refresh_validation.required_spec_claims.clear();
        refresh_validation.validate_exp = true;
        refresh_validation.leeway = config.leeway_seconds;

        Self {
            access_key: access_secret.as_deref().map(EncodingKey::from_secret),
            refresh_key: refresh_secret.as_deref().map(EncodingKey::from_secret),
            refresh_decoding_key: refresh_secret.as_deref().map(DecodingKey::from_secret),
            refresh_validation,
            access_ttl_seconds: config.access_token_ttl_seconds,
            refresh_ttl_hours: config.refresh_token_ttl_hours,
        }
    }

    fn access_ttl(&self) -> AppResult<Duration> {
        i64::try_from(self.access_ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| AppError::configuration("Access token lifetime is out of range"))
    }

    fn refresh_ttl(&self) -> AppResult<Option<Duration>> {
        self.refresh_ttl_hours
            .map(|hours| {
                i64::try_from(hours)
                    .ok()
                    .and_then(Duration::try_hours)
                    .ok_or_else(|| {
                        AppError::configuration("Refresh token lifetime is out of range")
                    })
            })
            .transpose()
    }

    fn sign(&self, key: Option<&EncodingKey>, claims: &Claims, kind: &str) -> AppResult<String> {
        let key = key.ok_or_else(|| {
            AppError::encoding(format!("{kind} token signing key is not configured"))
        })?;

        encode(&Header::default(), claims, key).map_err(|e| {
            AppError::with_source(
                ErrorKind::Encoding,
                format!("Failed to encode {} token", kind.to_lowercase()),
                e,
            )
        })
    }
}

impl TokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> AppResult<String> {
        let claims = Claims::issue(payload, Some(self.access_ttl()?))?;
        self.sign(self.access_key.as_ref(), &claims, "Access")
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> AppResult<String> {
        let claims = Claims::issue(payload, self.refresh_ttl()?)?;
        self.sign(self.refresh_key.as_ref(), &claims, "Refresh")
    }

    fn verify_refresh_token(&self, token: &str) -> AppResult<()> {
        let key = self
            .refresh_decoding_key
            .as_ref()
            .ok_or_else(|| AppError::configuration("Refresh token key is not configured"))?;

        decode::<Claims>(token, key, &self.refresh_validation).map_err(|e| {
            let message = match e.kind() {
                JwtErrorKind::ExpiredSignature => "Refresh token has expired",
                _ => "Refresh token is not valid",
            };
            AppError::with_source(ErrorKind::InvalidToken, message, e)
        })?;

        Ok(())
    }

    fn decode_payload(&self, token: &str) -> AppResult<TokenPayload> {
        let data = dangerous::insecure_decode::<Claims>(token).map_err(|e| {
            AppError::with_source(ErrorKind::Decode, "Failed to decode token payload", e)
        })?;

        Ok(data.claims.payload)
    }
}
