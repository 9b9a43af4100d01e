//! Service layer for user, group and permission rules.
//!
//! Services sit on top of the repositories in [`crate::data`]. They normalize input,
//! enforce uniqueness and existence rules, hash passwords and translate database
//! results into [`crate::error::Error`] values.

pub mod group;
pub mod permission;
pub mod user;
