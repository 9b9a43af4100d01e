//! User input and output types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::db::UserModel;

/// Values for a user row about to be inserted.
///
/// `password` must already be hashed or marked unusable; repositories store it verbatim.
#[derive(Clone, Debug)]
pub struct NewUser {
    /// Unique login name
    pub username: String,
    /// Stored password value
    pub password: String,
    /// Email address
    pub email: String,
    /// Staff flag
    pub is_staff: bool,
    /// Superuser flag
    pub is_superuser: bool,
}

/// User representation safe to hand outside the crate; never carries the password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// User ID
    pub id: i32,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Staff flag
    pub is_staff: bool,
    /// Active flag
    pub is_active: bool,
    /// Superuser flag
    pub is_superuser: bool,
    /// Last recorded login
    pub last_login: Option<NaiveDateTime>,
    /// Creation timestamp
    pub date_joined: NaiveDateTime,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_staff: user.is_staff,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            last_login: user.last_login,
            date_joined: user.date_joined,
        }
    }
}

#[cfg(test)]
mod tests {
    use authentication_test_utils::prelude::*;

    use crate::model::user::UserDto;

    /// Expect every field but the password to be carried over
    #[test]
    fn converts_model_without_password() {
        let user = factory::mock_user_model(1);

        let dto = UserDto::from(user.clone());
        let json = serde_json::to_string(&dto).unwrap();

        assert_eq!(dto.id, 1);
        assert_eq!(dto.username, TEST_USERNAME);
        assert_eq!(dto.email, TEST_EMAIL);
        assert_eq!(dto.date_joined, user.date_joined);
        assert!(!json.contains(&user.password));
    }
}
