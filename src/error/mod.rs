//! Error types for the authentication crate.
//!
//! Domain errors live in submodules and are aggregated into [`Error`], which also
//! wraps database errors so repository results can be propagated with `?`.

pub mod auth;
pub mod config;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Main error type for the authentication crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// User, group or permission rule violated.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Password hashing failed or a stored hash could not be parsed.
    #[error("Failed to hash or verify password: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
