//! Permissions granted directly to users.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::db::{PermissionModel, UserModel};

/// Repository for permissions granted directly to users
///
/// Permissions a user holds through group membership are not included.
pub struct UserPermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserPermissionRepository<'a, C> {
    /// Creates a new instance of [`UserPermissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Grants a permission to a user
    ///
    /// # Returns
    /// - `Ok(true)` if the grant was created
    /// - `Ok(false)` if the user already held the permission
    /// - `Err(DbErr)` if either side does not exist or the query fails
    pub async fn add(&self, user_id: i32, permission_id: i32) -> Result<bool, DbErr> {
        if self.contains(user_id, permission_id).await? {
            return Ok(false);
        }

        entity::prelude::AuthUserUserPermissions::insert(
            entity::auth_user_user_permissions::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                permission_id: ActiveValue::Set(permission_id),
            },
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Revokes a permission from a user, returning whether a grant existed
    pub async fn remove(&self, user_id: i32, permission_id: i32) -> Result<bool, DbErr> {
        let result =
            entity::prelude::AuthUserUserPermissions::delete_by_id((user_id, permission_id))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    /// Revokes every permission granted directly to a user
    pub async fn clear(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthUserUserPermissions::delete_many()
            .filter(entity::auth_user_user_permissions::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns whether the link exists
    pub async fn contains(&self, user_id: i32, permission_id: i32) -> Result<bool, DbErr> {
        Ok(
            entity::prelude::AuthUserUserPermissions::find_by_id((user_id, permission_id))
                .one(self.db)
                .await?
                .is_some(),
        )
    }

    /// Counts the links of a user
    pub async fn count_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::AuthUserUserPermissions::find()
            .filter(entity::auth_user_user_permissions::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Gets all permissions granted directly to the user, ordered by permission ID
    pub async fn get_permissions_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<PermissionModel>, DbErr> {
        entity::prelude::AuthPermission::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::auth_permission::Relation::AuthUserUserPermissions.def(),
            )
            .filter(entity::auth_user_user_permissions::Column::UserId.eq(user_id))
            .order_by_asc(entity::auth_permission::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all users holding the permission directly, ordered by user ID
    pub async fn get_users_with_permission(
        &self,
        permission_id: i32,
    ) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::AuthUser::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::auth_user::Relation::AuthUserUserPermissions.def(),
            )
            .filter(entity::auth_user_user_permissions::Column::PermissionId.eq(permission_id))
            .order_by_asc(entity::auth_user::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use authentication_test_utils::prelude::*;

    use crate::data::user::user_permission::UserPermissionRepository;

    /// Expect a new user to hold no permissions
    #[tokio::test]
    async fn new_user_has_no_permissions() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user_model = test.user().insert_user(TEST_USERNAME).await?;
        test.permission()
            .insert_permission("view_report", "Can view report")
            .await?;

        let user_permission_repo = UserPermissionRepository::new(&test.db);

        assert_eq!(user_permission_repo.count_for_user(user_model.id).await?, 0);
        assert!(user_permission_repo
            .get_permissions_for_user(user_model.id)
            .await?
            .is_empty());

        Ok(())
    }

    /// Expect granting twice to leave a single grant
    #[tokio::test]
    async fn grants_permission_once() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user_model = test.user().insert_user(TEST_USERNAME).await?;
        let permission = test
            .permission()
            .insert_permission("view_report", "Can view report")
            .await?;

        let user_permission_repo = UserPermissionRepository::new(&test.db);
        let first = user_permission_repo.add(user_model.id, permission.id).await?;
        let second = user_permission_repo.add(user_model.id, permission.id).await?;

        assert!(first);
        assert!(!second);
        assert_eq!(
            user_permission_repo
                .get_permissions_for_user(user_model.id)
                .await?,
            vec![permission.clone()]
        );
        assert_eq!(
            user_permission_repo
                .get_users_with_permission(permission.id)
                .await?,
            vec![user_model]
        );

        Ok(())
    }

    /// Expect revoking to remove only the given grant
    #[tokio::test]
    async fn revokes_permission() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user_model = test.user().insert_user(TEST_USERNAME).await?;
        let view = test
            .permission()
            .insert_permission("view_report", "Can view report")
            .await?;
        let change = test
            .permission()
            .insert_permission("change_report", "Can change report")
            .await?;
        test.user().grant_permission(user_model.id, view.id).await?;
        test.user().grant_permission(user_model.id, change.id).await?;

        let user_permission_repo = UserPermissionRepository::new(&test.db);
        let removed = user_permission_repo.remove(user_model.id, view.id).await?;
        let removed_again = user_permission_repo.remove(user_model.id, view.id).await?;

        assert!(removed);
        assert!(!removed_again);
        assert!(user_permission_repo.contains(user_model.id, change.id).await?);
        assert_eq!(user_permission_repo.clear(user_model.id).await?, 1);
        assert_eq!(user_permission_repo.count_for_user(user_model.id).await?, 0);

        Ok(())
    }

    /// Expect Error when the permission does not exist
    #[tokio::test]
    async fn fails_for_nonexistent_permission() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user_model = test.user().insert_user(TEST_USERNAME).await?;

        let user_permission_repo = UserPermissionRepository::new(&test.db);
        let nonexistent_permission_id = 1;
        let result = user_permission_repo
            .add(user_model.id, nonexistent_permission_id)
            .await;

        assert!(result.is_err());

        Ok(())
    }
}
