//! User, group and permission models for application authentication.
//!
//! The crate persists users with Argon2-hashed passwords, named groups and
//! permissions through SeaORM, and exposes repositories for the many-to-many
//! relations between them. Every save of a user made through the `ActiveModel`
//! API is logged on the `users.models` target.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;

pub use entity::auth_user::LOG_TARGET as USER_MODEL_LOG_TARGET;
