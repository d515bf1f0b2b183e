//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `FORUMAPI__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::auth::{AuthConfig, MAX_TOKEN_LIFETIME_HOURS};
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix shared by every setting.
const ENV_PREFIX: &str = "FORUMAPI";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token signing settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay, and
    /// environment variables such as `FORUMAPI__AUTH__ACCESS_TOKEN_KEY`.
    /// Both files are optional.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from an inline TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make token signing unsafe.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.access_token_key.is_empty() || self.auth.refresh_token_key.is_empty() {
            return Err(AppError::configuration(
                "auth.access_token_key and auth.refresh_token_key must both be set",
            ));
        }

        if self.auth.access_token_key == self.auth.refresh_token_key {
            return Err(AppError::configuration(
                "auth.access_token_key and auth.refresh_token_key must differ",
            ));
        }

        if self.auth.access_token_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "auth.access_token_ttl_seconds must be greater than zero",
            ));
        }

        if self.auth.access_token_ttl_seconds > MAX_TOKEN_LIFETIME_HOURS * 3600 {
            return Err(AppError::configuration(format!(
                "auth.access_token_ttl_seconds must not exceed {} (100 years)",
                MAX_TOKEN_LIFETIME_HOURS * 3600
            )));
        }

        if self
            .auth
            .refresh_token_ttl_hours
            .is_some_and(|hours| hours == 0 || hours > MAX_TOKEN_LIFETIME_HOURS)
        {
            return Err(AppError::configuration(format!(
                "auth.refresh_token_ttl_hours must be between 1 and {MAX_TOKEN_LIFETIME_HOURS} (100 years)"
            )));
        }

        Ok(())
    }
}
