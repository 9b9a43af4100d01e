use authentication::{
    data::user::{user_group::UserGroupRepository, user_permission::UserPermissionRepository},
    service::{group::GroupService, permission::PermissionService},
};
use authentication_test_utils::prelude::*;
use sea_orm::{ModelTrait, PaginatorTrait};

use crate::util::setup::test_setup_with_user;

/// Expect a new user to have no groups or permissions, then one group once added
#[tokio::test]
async fn adds_group_to_user() -> Result<(), TestError> {
    let (test, user) = test_setup_with_user().await?;
    let user_group_repo = UserGroupRepository::new(&test.db);
    let user_permission_repo = UserPermissionRepository::new(&test.db);

    assert_eq!(user_group_repo.count_for_user(user.id).await?, 0);
    assert_eq!(user_permission_repo.count_for_user(user.id).await?, 0);

    let group_service = GroupService::new(&test.db);
    let group = group_service.create_group(TEST_GROUP_NAME).await.unwrap();
    group_service
        .add_user_to_group(user.id, group.id)
        .await
        .unwrap();

    assert_eq!(user_group_repo.count_for_user(user.id).await?, 1);
    assert!(user_group_repo
        .get_groups_for_user(user.id)
        .await?
        .contains(&group));
    assert_eq!(
        user.find_related(entity::prelude::AuthGroup)
            .count(&test.db)
            .await?,
        1
    );

    Ok(())
}

/// Expect a group added twice to be counted once
#[tokio::test]
async fn adding_group_twice_keeps_one_membership() -> Result<(), TestError> {
    let (test, user) = test_setup_with_user().await?;

    let group_service = GroupService::new(&test.db);
    let group = group_service.create_group(TEST_GROUP_NAME).await.unwrap();
    group_service
        .add_user_to_group(user.id, group.id)
        .await
        .unwrap();
    group_service
        .add_user_to_group(user.id, group.id)
        .await
        .unwrap();

    let user_group_repo = UserGroupRepository::new(&test.db);
    assert_eq!(user_group_repo.count_for_user(user.id).await?, 1);

    Ok(())
}

/// Expect a permission granted to the group to reach its members
#[tokio::test]
async fn inherits_group_permissions() -> Result<(), TestError> {
    let (test, user) = test_setup_with_user().await?;

    let group_service = GroupService::new(&test.db);
    let permission_service = PermissionService::new(&test.db);
    let group = group_service.create_group(TEST_GROUP_NAME).await.unwrap();
    let permission = permission_service
        .create_permission("view_report", "Can view report")
        .await
        .unwrap();
    group_service
        .add_user_to_group(user.id, group.id)
        .await
        .unwrap();
    permission_service
        .grant_to_group(group.id, permission.id)
        .await
        .unwrap();

    let user_permission_repo = UserPermissionRepository::new(&test.db);
    assert_eq!(user_permission_repo.count_for_user(user.id).await?, 0);
    assert_eq!(
        permission_service
            .get_user_permissions(user.id)
            .await
            .unwrap(),
        vec![permission]
    );

    Ok(())
}
