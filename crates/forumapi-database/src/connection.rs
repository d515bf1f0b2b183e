//! PostgreSQL pool opened once at startup.

use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use forumapi_core::config::DatabaseConfig;
use forumapi_core::error::{AppError, ErrorKind};
use forumapi_core::result::AppResult;

/// Migrations under the workspace `migrations/` directory, embedded at build time.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Handle to the PostgreSQL pool backing the user and token tables.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connects with the configured pool limits, then applies pending
    /// migrations when `run_migrations` is set.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        info!(
            target = %redacted_url(&config.url),
            max_connections = config.max_connections,
            "Opening PostgreSQL pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Could not reach PostgreSQL", e)
            })?;

        if config.run_migrations {
            MIGRATOR.run(&pool).await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Could not apply migrations", e)
            })?;
            info!(count = MIGRATOR.iter().count(), "Schema is up to date");
        }

        Ok(Self { pool })
    }

    /// The underlying sqlx pool, shared by the repositories.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trips a trivial query; used by `GET /health`.
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "PostgreSQL is unreachable", e)
            })
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}

/// Drops the userinfo of a connection URL so it can be logged.
fn redacted_url(url: &str) -> String {
    match (url.split_once("://"), url.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{scheme}://***@{host}"),
        _ => url.to_string(),
    }
}
