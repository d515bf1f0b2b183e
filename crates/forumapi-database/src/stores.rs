//! Repository selection for `database.provider`.

use std::sync::Arc;

use tracing::info;

use forumapi_core::config::{DatabaseConfig, DatabaseProvider};
use forumapi_core::result::AppResult;
use forumapi_core::traits::{AuthenticationRepository, UserRepository};

use crate::connection::DatabasePool;
use crate::memory::{MemoryAuthenticationRepository, MemoryUserRepository};
use crate::repositories::{PgAuthenticationRepository, PgUserRepository};

/// The user and refresh-token stores for one process.
#[derive(Clone)]
pub struct Stores {
    /// Open pool with the `postgres` provider; `None` with `memory`.
    pub pool: Option<DatabasePool>,
    /// Account store.
    pub users: Arc<dyn UserRepository>,
    /// Refresh token registry.
    pub tokens: Arc<dyn AuthenticationRepository>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl Stores {
    /// Builds both stores for the configured provider.
    ///
    /// With `postgres` this opens the pool (and migrates) before any
    /// repository exists.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::open(config).await?;
                Ok(Self {
                    users: Arc::new(PgUserRepository::new(pool.pool().clone())),
                    tokens: Arc::new(PgAuthenticationRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            DatabaseProvider::Memory => {
                info!("Using in-memory user and token stores");
                Ok(Self::in_memory())
            }
        }
    }

    /// Fresh, empty process-local stores.
    pub fn in_memory() -> Self {
        Self {
            pool: None,
            users: Arc::new(MemoryUserRepository::new()),
            tokens: Arc::new(MemoryAuthenticationRepository::new()),
        }
    }
}
