use authentication::{model::db::UserModel, service::user::UserService};
use authentication_test_utils::prelude::*;

/// Fresh database with the user tables and one user created through [`UserService`].
///
/// The user is `testuser` / `testuser@example.com` with the password `password123`.
pub async fn test_setup_with_user() -> Result<(TestContext, UserModel), TestError> {
    let test = test_setup_with_user_tables!()?;

    let user = UserService::new(&test.db)
        .create_user(TEST_USERNAME, TEST_EMAIL, Some(TEST_PASSWORD))
        .await
        .expect("Failed to create test user");

    Ok((test, user))
}
