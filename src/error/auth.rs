//! Domain errors for users, groups and permissions.

use thiserror::Error;

/// Violations of user, group and permission rules.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Users cannot be created without a username.
    #[error("The given username must be set")]
    UsernameRequired,
    /// Another user already holds this username.
    #[error("A user with username {0:?} already exists")]
    UsernameTaken(String),
    /// Groups cannot be created without a name.
    #[error("The given group name must be set")]
    GroupNameRequired,
    /// Another group already holds this name.
    #[error("A group named {0:?} already exists")]
    GroupNameTaken(String),
    /// Another permission already holds this codename.
    #[error("A permission with codename {0:?} already exists")]
    PermissionCodenameTaken(String),
    /// No user exists with this ID.
    #[error("User ID {0:?} not found")]
    UserNotFound(i32),
    /// No group exists with this ID.
    #[error("Group ID {0:?} not found")]
    GroupNotFound(i32),
    /// No permission exists with this ID.
    #[error("Permission ID {0:?} not found")]
    PermissionNotFound(i32),
}
