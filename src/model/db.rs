//! Database model type aliases.
//!
//! Convenient aliases for SeaORM entity models used throughout the crate, so signatures
//! don't need to spell out paths into the `entity` crate.

/// Type alias for user database model.
///
/// # Fields (from `entity::auth_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `username` - Unique login name; also the user's display form
/// - `password` - Argon2 PHC hash, or an unusable marker starting with `!`
/// - `email` - Email address with lowercased domain, may be empty
/// - `first_name`, `last_name` - Optional personal names, empty when unset
/// - `is_staff`, `is_active`, `is_superuser` - Account flags
/// - `last_login` - Timestamp of the last recorded login
/// - `date_joined` - Timestamp when the user was created
pub type UserModel = entity::auth_user::Model;

/// Type alias for group database model.
pub type GroupModel = entity::auth_group::Model;

/// Type alias for permission database model.
pub type PermissionModel = entity::auth_permission::Model;
