use crate::{
    error::{auth::AuthError, Error},
    service::user::UserService,
};

use super::*;

/// Expect changed fields to be persisted
#[tokio::test]
async fn saves_changed_fields() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let mut user_model = test.user().insert_user(TEST_USERNAME).await?;
    user_model.first_name = "Test".to_string();
    user_model.is_active = false;

    let user_service = UserService::new(&test.db);
    user_service.save(user_model.clone()).await.unwrap();

    let stored = test.user().get_user(TEST_USERNAME).await?;
    assert_eq!(stored, user_model);

    Ok(())
}

/// Expect the save to be logged before and after the write
#[tokio::test]
async fn logs_save() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user_model = test.user().insert_user(TEST_USERNAME).await?;
    let capture = LogCapture::new();
    let _guard = capture.set_default();

    let user_service = UserService::new(&test.db);
    user_service.save(user_model).await.unwrap();

    assert_eq!(
        capture.output("users.models", tracing::Level::INFO),
        vec![
            "INFO:users.models:Saving user instance: testuser",
            "INFO:users.models:User instance saved successfully: testuser",
        ]
    );

    Ok(())
}

/// Expect Error when the user row no longer exists
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user_model = test.user().insert_user(TEST_USERNAME).await?;
    let user_id = user_model.id;

    let user_service = UserService::new(&test.db);
    user_service.delete_user(user_id).await.unwrap();
    let result = user_service.save(user_model).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UserNotFound(id))) if id == user_id
    ));

    Ok(())
}
