use authentication_test_utils::prelude::*;

use crate::util::setup::test_setup_with_user;

/// Expect a user to display as its username
#[tokio::test]
async fn displays_username() -> Result<(), TestError> {
    let (_test, user) = test_setup_with_user().await?;

    assert_eq!(user.to_string(), "testuser");

    Ok(())
}
