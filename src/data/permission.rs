//! Permission repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::model::db::PermissionModel;

/// Repository for the `auth_permission` table
pub struct PermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PermissionRepository<'a, C> {
    /// Creates a new instance of [`PermissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new permission
    ///
    /// # Arguments
    /// - `codename`: Unique machine name, e.g. `view_report`
    /// - `name`: Human readable name, e.g. `Can view report`
    pub async fn create(&self, codename: String, name: String) -> Result<PermissionModel, DbErr> {
        let permission = entity::auth_permission::ActiveModel {
            codename: ActiveValue::Set(codename),
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        permission.insert(self.db).await
    }

    /// Gets a row by ID
    pub async fn get_by_id(&self, permission_id: i32) -> Result<Option<PermissionModel>, DbErr> {
        entity::prelude::AuthPermission::find_by_id(permission_id)
            .one(self.db)
            .await
    }

    /// Gets a permission by codename
    pub async fn get_by_codename(&self, codename: &str) -> Result<Option<PermissionModel>, DbErr> {
        entity::prelude::AuthPermission::find()
            .filter(entity::auth_permission::Column::Codename.eq(codename))
            .one(self.db)
            .await
    }

    /// Deletes a permission, removing every user and group grant of it by cascade
    pub async fn delete(&self, permission_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AuthPermission::delete_by_id(permission_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use authentication_test_utils::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use crate::data::permission::PermissionRepository;

    /// Expect a created permission to be found by codename
    #[tokio::test]
    async fn creates_and_finds_permission() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;

        let permission_repo = PermissionRepository::new(&test.db);
        let permission = permission_repo
            .create("view_report".to_string(), "Can view report".to_string())
            .await?;

        assert_eq!(permission.to_string(), "Can view report");
        assert_eq!(
            permission_repo.get_by_codename("view_report").await?,
            Some(permission.clone())
        );
        assert_eq!(
            permission_repo.get_by_id(permission.id).await?,
            Some(permission)
        );

        Ok(())
    }

    /// Expect Error for a duplicate codename
    #[tokio::test]
    async fn fails_for_duplicate_codename() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        test.permission()
            .insert_permission("view_report", "Can view report")
            .await?;

        let permission_repo = PermissionRepository::new(&test.db);
        let result = permission_repo
            .create("view_report".to_string(), "Another name".to_string())
            .await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect grants to be removed with the permission
    #[tokio::test]
    async fn deletes_permission_and_grants() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user_model = test.user().insert_user(TEST_USERNAME).await?;
        let group_model = test.group().insert_group(TEST_GROUP_NAME).await?;
        let permission = test
            .permission()
            .insert_permission("view_report", "Can view report")
            .await?;
        test.user()
            .grant_permission(user_model.id, permission.id)
            .await?;
        test.group()
            .grant_permission(group_model.id, permission.id)
            .await?;

        let permission_repo = PermissionRepository::new(&test.db);
        let result = permission_repo.delete(permission.id).await?;

        assert_eq!(result.rows_affected, 1);
        assert_eq!(
            entity::prelude::AuthUserUserPermissions::find()
                .count(&test.db)
                .await?,
            0
        );
        assert_eq!(
            entity::prelude::AuthGroupPermissions::find()
                .count(&test.db)
                .await?,
            0
        );

        Ok(())
    }
}
