use authentication::{service::user::UserService, USER_MODEL_LOG_TARGET};
use authentication_test_utils::prelude::*;
use tracing::Level;

use crate::util::setup::test_setup_with_user;

/// Expect saving a user to log before and after the write, in order
#[tokio::test]
async fn logs_save_of_user() -> Result<(), TestError> {
    let (test, user) = test_setup_with_user().await?;
    let capture = LogCapture::new();
    let _guard = capture.set_default();

    let user_service = UserService::new(&test.db);
    user_service.save(user).await.unwrap();

    assert_eq!(
        capture.output(USER_MODEL_LOG_TARGET, Level::INFO),
        vec![
            "INFO:users.models:Saving user instance: testuser",
            "INFO:users.models:User instance saved successfully: testuser",
        ]
    );

    Ok(())
}

/// Expect each save to log its own pair of lines
#[tokio::test]
async fn logs_every_save() -> Result<(), TestError> {
    let (test, mut user) = test_setup_with_user().await?;
    let capture = LogCapture::new();
    let _guard = capture.set_default();

    let user_service = UserService::new(&test.db);
    user = user_service.save(user).await.unwrap();
    user.first_name = "Test".to_string();
    user_service.save(user).await.unwrap();

    assert_eq!(capture.logs_for(USER_MODEL_LOG_TARGET, Level::INFO).len(), 4);

    Ok(())
}
