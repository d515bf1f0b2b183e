//! Refresh token registry trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Persists issued refresh tokens.
///
/// The registry is flat and keyed by the token value. Removing a token is
/// the only way to revoke it; a revoked token stays unusable even though its
/// signature is still valid.
#[async_trait]
pub trait AuthenticationRepository: Send + Sync + 'static {
    /// Store a refresh token. Duplicates are allowed.
    async fn add_token(&self, token: &str) -> AppResult<()>;

    /// Fail with [`ErrorKind::TokenNotFound`](crate::ErrorKind::TokenNotFound)
    /// if the token is not stored.
    async fn check_availability_token(&self, token: &str) -> AppResult<()>;

    /// Remove every stored copy of the token.
    ///
    /// Removing a token that is not stored succeeds and changes nothing.
    async fn delete_token(&self, token: &str) -> AppResult<()>;
}
