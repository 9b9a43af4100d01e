//! Application configuration loaded from the environment.

use crate::error::config::ConfigError;

/// Log filter used when `LOG_LEVEL` is unset.
pub static DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration.
pub struct Config {
    /// Connection URL for the database, e.g. `postgres://...` or `sqlite::memory:`.
    pub database_url: String,
    /// `tracing_subscriber::EnvFilter` directive applied when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - `DATABASE_URL` is empty
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        if database_url.trim().is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_URL".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let log_level =
            std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            database_url,
            log_level,
        })
    }

    /// Load a `.env` file if one exists, then read configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process wide, so every case runs in one test.
    #[test]
    fn reads_database_url_and_log_level() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("LOG_LEVEL");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingEnvVar(ref var)) if var == "DATABASE_URL"
        ));

        std::env::set_var("DATABASE_URL", " ");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidEnvValue { .. })
        ));

        std::env::set_var("DATABASE_URL", "sqlite::memory:");
        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        std::env::set_var("LOG_LEVEL", "debug");
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("LOG_LEVEL");
    }
}
