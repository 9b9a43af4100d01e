use authentication::{model::user::UserDto, service::user::UserService};
use authentication_test_utils::prelude::*;

use crate::util::setup::test_setup_with_user;

/// Expect the created user to carry the given username and email
#[tokio::test]
async fn creates_user_with_username_and_email() -> Result<(), TestError> {
    let (_test, user) = test_setup_with_user().await?;

    assert_eq!(user.username, TEST_USERNAME);
    assert_eq!(user.email, TEST_EMAIL);

    Ok(())
}

/// Expect the password to be stored hashed and still verify
#[tokio::test]
async fn stores_hashed_password() -> Result<(), TestError> {
    let (test, user) = test_setup_with_user().await?;

    let stored = test.user().get_user(TEST_USERNAME).await?;
    assert_ne!(stored.password, TEST_PASSWORD);

    let user_service = UserService::new(&test.db);
    assert!(user_service
        .check_password(user.id, TEST_PASSWORD)
        .await
        .unwrap());

    Ok(())
}

/// Expect the serialized user to omit the password
#[tokio::test]
async fn serializes_without_password() -> Result<(), TestError> {
    let (test, user) = test_setup_with_user().await?;

    let user_service = UserService::new(&test.db);
    let dto = user_service.get_user(user.id).await.unwrap().unwrap();
    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["username"], TEST_USERNAME);
    assert_eq!(json["email"], TEST_EMAIL);
    assert!(json.get("password").is_none());
    assert_eq!(serde_json::from_value::<UserDto>(json).unwrap(), dto);

    Ok(())
}
