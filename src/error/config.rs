//! Configuration errors.

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set to an unusable value.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}
