use crate::{
    error::{auth::AuthError, Error},
    service::user::UserService,
    util::password::is_password_usable,
};

use super::*;

/// Expect only the original password to be accepted
#[tokio::test]
async fn checks_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let user_service = UserService::new(&test.db);
    let user = user_service
        .create_user(TEST_USERNAME, TEST_EMAIL, Some(TEST_PASSWORD))
        .await
        .unwrap();

    assert!(user_service
        .check_password(user.id, TEST_PASSWORD)
        .await
        .unwrap());
    assert!(!user_service
        .check_password(user.id, "wrong-password")
        .await
        .unwrap());

    Ok(())
}

/// Expect a new password to replace the old one
#[tokio::test]
async fn sets_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user_model = test.user().insert_user(TEST_USERNAME).await?;

    let user_service = UserService::new(&test.db);
    let user = user_service
        .set_password(user_model.id, Some("new-password"))
        .await
        .unwrap();

    assert!(is_password_usable(&user.password));
    assert!(user_service
        .check_password(user.id, "new-password")
        .await
        .unwrap());

    let user = user_service.set_password(user.id, None).await.unwrap();
    assert!(!is_password_usable(&user.password));

    Ok(())
}

/// Expect Error for user ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let nonexistent_user_id = 1;
    let user_service = UserService::new(&test.db);
    let set_result = user_service
        .set_password(nonexistent_user_id, Some(TEST_PASSWORD))
        .await;
    let check_result = user_service
        .check_password(nonexistent_user_id, TEST_PASSWORD)
        .await;

    assert!(matches!(
        set_result,
        Err(Error::AuthError(AuthError::UserNotFound(1)))
    ));
    assert!(matches!(
        check_result,
        Err(Error::AuthError(AuthError::UserNotFound(1)))
    ));

    Ok(())
}

/// Expect the last login to be stamped
#[tokio::test]
async fn records_login() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user_model = test.user().insert_user(TEST_USERNAME).await?;

    let user_service = UserService::new(&test.db);
    let user = user_service.record_login(user_model.id).await.unwrap();

    assert!(user.last_login.is_some());
    assert!(matches!(
        user_service.record_login(user_model.id + 1).await,
        Err(Error::AuthError(AuthError::UserNotFound(_)))
    ));

    Ok(())
}
