//! Session lifecycle service: login, access token refresh, and logout.

use std::sync::Arc;

use tracing::{info, warn};

use forumapi_core::result::AppResult;
use forumapi_core::traits::{AuthenticationRepository, TokenManager};
use forumapi_core::types::TokenPayload;
use forumapi_entity::authentication::{NewAuth, RefreshAuth, UserLogin};

use crate::credential::CredentialVerifier;

/// Issues and revokes token pairs.
///
/// Every operation runs its checks in a fixed order and stops at the first
/// failure, so nothing is written or deleted unless all checks passed.
#[derive(Clone)]
pub struct AuthSessionService {
    /// Username/password verification.
    credentials: Arc<CredentialVerifier>,
    /// Token signing and verification.
    tokens: Arc<dyn TokenManager>,
    /// Registry of live refresh tokens.
    store: Arc<dyn AuthenticationRepository>,
}

impl std::fmt::Debug for AuthSessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSessionService")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl AuthSessionService {
    /// Creates a new session service with all required dependencies.
    pub fn new(
        credentials: Arc<CredentialVerifier>,
        tokens: Arc<dyn TokenManager>,
        store: Arc<dyn AuthenticationRepository>,
    ) -> Self {
        Self {
            credentials,
            tokens,
            store,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Verify the username/password pair
    /// 2. Sign an access and a refresh token for the username
    /// 3. Register the refresh token
    pub async fn login(&self, login: &UserLogin) -> AppResult<NewAuth> {
        if let Err(e) = self
            .credentials
            .verify_credential(&login.username, &login.password)
            .await
        {
            warn!(username = %login.username, error = %e, "Login failed");
            return Err(e);
        }

        let payload = TokenPayload::new(login.username.clone());
        let access_token = self.tokens.create_access_token(&payload)?;
        let refresh_token = self.tokens.create_refresh_token(&payload)?;

        self.store.add_token(&refresh_token).await?;

        info!(username = %login.username, "User logged in");

        Ok(NewAuth {
            access_token,
            refresh_token,
        })
    }

    /// Issues a fresh access token for a registered refresh token.
    ///
    /// The refresh token is not rotated and stays valid.
    pub async fn refresh(&self, auth: &RefreshAuth) -> AppResult<String> {
        let payload = self.registered_payload(&auth.refresh_token).await?;
        let access_token = self.tokens.create_access_token(&payload)?;

        info!(username = %payload.username, "Access token refreshed");
        Ok(access_token)
    }

    /// Revokes a registered refresh token.
    pub async fn logout(&self, auth: &RefreshAuth) -> AppResult<()> {
        self.tokens.verify_refresh_token(&auth.refresh_token)?;
        self.store
            .check_availability_token(&auth.refresh_token)
            .await?;
        self.store.delete_token(&auth.refresh_token).await?;

        info!("Refresh token revoked");
        Ok(())
    }

    /// Verifies the signature, then the registration, then reads the payload.
    async fn registered_payload(&self, refresh_token: &str) -> AppResult<TokenPayload> {
        self.tokens.verify_refresh_token(refresh_token)?;
        self.store.check_availability_token(refresh_token).await?;
        self.tokens.decode_payload(refresh_token)
    }
}
