//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main authentication crate to keep test
//! signatures consistent.

/// Type alias for user database model.
pub type UserModel = entity::auth_user::Model;

/// Type alias for group database model.
pub type GroupModel = entity::auth_group::Model;

/// Type alias for permission database model.
pub type PermissionModel = entity::auth_permission::Model;
