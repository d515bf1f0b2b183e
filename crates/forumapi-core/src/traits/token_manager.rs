//! Token codec trait.

use crate::result::AppResult;
use crate::types::TokenPayload;

/// Signs and verifies access and refresh tokens.
///
/// Implementations hold no state beyond their signing keys and lifetimes.
pub trait TokenManager: Send + Sync + 'static {
    /// Sign a short-lived access token for `payload`.
    ///
    /// Fails with [`ErrorKind::Encoding`](crate::ErrorKind::Encoding) when
    /// the signing key is unavailable.
    fn create_access_token(&self, payload: &TokenPayload) -> AppResult<String>;

    /// Sign a refresh token for `payload` with the refresh key.
    fn create_refresh_token(&self, payload: &TokenPayload) -> AppResult<String>;

    /// Check a refresh token's signature and, when present, its expiry.
    ///
    /// Fails with [`ErrorKind::InvalidToken`](crate::ErrorKind::InvalidToken)
    /// on a wrong key, a tampered payload, or a malformed token.
    fn verify_refresh_token(&self, token: &str) -> AppResult<()>;

    /// Read the payload of a token **without** checking its signature.
    ///
    /// Only call this on tokens that were verified elsewhere. Fails with
    /// [`ErrorKind::Decode`](crate::ErrorKind::Decode) on structurally
    /// invalid input.
    fn decode_payload(&self, token: &str) -> AppResult<TokenPayload>;
}
