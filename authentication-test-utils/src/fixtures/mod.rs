//! Test fixture modules for database records.
//!
//! Fixtures insert rows directly with `Entity::insert`, so they bypass the
//! `ActiveModel` hooks and emit no save logs. Each submodule covers one entity:
//!
//! - `user` - Users and their group/permission links
//! - `group` - Groups and their permission links
//! - `permission` - Permissions

pub mod group;
pub mod permission;
pub mod user;
