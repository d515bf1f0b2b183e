//! Application state shared across all handlers.

use std::sync::Arc;

use forumapi_auth::AuthSessionService;
use forumapi_core::config::AppConfig;
use forumapi_database::DatabasePool;
use forumapi_service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool, absent with the in-memory provider
    pub database: Option<DatabasePool>,
    /// Login, refresh, and logout
    pub auth_service: Arc<AuthSessionService>,
    /// Registration
    pub user_service: Arc<UserService>,
}
