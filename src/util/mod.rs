//! Utility functions shared by repositories and services.
//!
//! - `password` - Argon2 password hashing and unusable password markers
//! - `normalize` - Username and email normalization applied before persisting users

pub mod normalize;
pub mod password;
