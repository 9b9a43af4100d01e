//! Permissions granted to groups.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::model::db::PermissionModel;

/// Repository for permissions granted to groups
pub struct GroupPermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupPermissionRepository<'a, C> {
    /// Creates a new instance of [`GroupPermissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Grants a permission to a group, returning false if the group already held it
    pub async fn add(&self, group_id: i32, permission_id: i32) -> Result<bool, DbErr> {
        let existing =
            entity::prelude::AuthGroupPermissions::find_by_id((group_id, permission_id))
                .one(self.db)
                .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::AuthGroupPermissions::insert(entity::auth_group_permissions::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            permission_id: ActiveValue::Set(permission_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Revokes a permission from a group, returning whether a grant existed
    pub async fn remove(&self, group_id: i32, permission_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthGroupPermissions::delete_by_id((group_id, permission_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all permissions granted to the group, ordered by permission ID
    pub async fn get_permissions_for_group(
        &self,
        group_id: i32,
    ) -> Result<Vec<PermissionModel>, DbErr> {
        entity::prelude::AuthPermission::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::auth_permission::Relation::AuthGroupPermissions.def(),
            )
            .filter(entity::auth_group_permissions::Column::GroupId.eq(group_id))
            .order_by_asc(entity::auth_permission::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use authentication_test_utils::prelude::*;

    use crate::data::group::group_permission::GroupPermissionRepository;

    /// Expect a grant to be listed once and removable
    #[tokio::test]
    async fn grants_and_revokes_permission() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let group_model = test.group().insert_group(TEST_GROUP_NAME).await?;
        let permission = test
            .permission()
            .insert_permission("view_report", "Can view report")
            .await?;

        let group_permission_repo = GroupPermissionRepository::new(&test.db);
        assert!(group_permission_repo.add(group_model.id, permission.id).await?);
        assert!(!group_permission_repo.add(group_model.id, permission.id).await?);
        assert_eq!(
            group_permission_repo
                .get_permissions_for_group(group_model.id)
                .await?,
            vec![permission.clone()]
        );

        assert!(group_permission_repo.remove(group_model.id, permission.id).await?);
        assert!(group_permission_repo
            .get_permissions_for_group(group_model.id)
            .await?
            .is_empty());

        Ok(())
    }

    /// Expect Error when the group does not exist
    #[tokio::test]
    async fn fails_for_nonexistent_group() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let permission = test
            .permission()
            .insert_permission("view_report", "Can view report")
            .await?;

        let group_permission_repo = GroupPermissionRepository::new(&test.db);
        let result = group_permission_repo.add(1, permission.id).await;

        assert!(result.is_err());

        Ok(())
    }
}
