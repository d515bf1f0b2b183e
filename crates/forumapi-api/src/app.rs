//! Application wiring: builds repositories and services from configuration.

use std::sync::Arc;

use forumapi_auth::{Argon2PasswordHasher, AuthSessionService, CredentialVerifier, JwtTokenManager};
use forumapi_core::config::AppConfig;
use forumapi_core::result::AppResult;
use forumapi_core::traits::{PasswordHash, TokenManager};
use forumapi_database::Stores;
use forumapi_service::UserService;

use crate::state::AppState;

/// Builds the shared application state for the configured provider.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let Stores {
        pool: database,
        users,
        tokens: tokens_store,
    } = Stores::from_config(&config.database).await?;

    let hasher: Arc<dyn PasswordHash> = Arc::new(Argon2PasswordHasher::new());
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(&config.auth));

    let credentials = Arc::new(CredentialVerifier::new(users.clone(), hasher.clone()));
    let auth_service = Arc::new(AuthSessionService::new(
        credentials,
        token_manager,
        tokens_store,
    ));
    let user_service = Arc::new(UserService::new(users, hasher));

    Ok(AppState {
        config: Arc::new(config),
        database,
        auth_service,
        user_service,
    })
}
