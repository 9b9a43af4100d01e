//! Factory functions for generating mock user database models.
//!
//! Provides pure functions for creating user, group and permission models with
//! standard test values. These are in-memory model instances that don't require
//! database interaction, suitable for unit tests.

use chrono::Utc;

use crate::{
    constant::{TEST_EMAIL, TEST_UNUSABLE_PASSWORD, TEST_USERNAME},
    model::{GroupModel, PermissionModel, UserModel},
};

/// Create a mock user database model for testing.
///
/// Returns a UserModel for the standard test user with an unusable password.
///
/// # Arguments
/// - `id` - The user record ID
///
/// # Returns
/// - `UserModel` - A user model with test data
pub fn mock_user_model(id: i32) -> UserModel {
    UserModel {
        id,
        username: TEST_USERNAME.to_string(),
        password: TEST_UNUSABLE_PASSWORD.to_string(),
        email: TEST_EMAIL.to_string(),
        first_name: String::new(),
        last_name: String::new(),
        is_staff: false,
        is_active: true,
        is_superuser: false,
        last_login: None,
        date_joined: Utc::now().naive_utc(),
    }
}

/// Create a mock group database model for testing.
pub fn mock_group_model(id: i32, name: &str) -> GroupModel {
    GroupModel {
        id,
        name: name.to_string(),
    }
}

/// Create a mock permission database model for testing.
pub fn mock_permission_model(id: i32, codename: &str, name: &str) -> PermissionModel {
    PermissionModel {
        id,
        name: name.to_string(),
        codename: codename.to_string(),
    }
}
