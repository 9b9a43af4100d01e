//! Permission service layer.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        group::{group_permission::GroupPermissionRepository, GroupRepository},
        permission::PermissionRepository,
        user::{
            user_group::UserGroupRepository, user_permission::UserPermissionRepository,
            UserRepository,
        },
    },
    error::{auth::AuthError, Error},
    model::db::PermissionModel,
};

/// Service for permissions and their grants to users and groups.
pub struct PermissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionService<'a> {
    /// Creates a new instance of [`PermissionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a permission with a unique codename.
    pub async fn create_permission(
        &self,
        codename: &str,
        name: &str,
    ) -> Result<PermissionModel, Error> {
        let permission_repo = PermissionRepository::new(self.db);

        if permission_repo.get_by_codename(codename).await?.is_some() {
            return Err(AuthError::PermissionCodenameTaken(codename.to_string()).into());
        }

        Ok(permission_repo
            .create(codename.to_string(), name.to_string())
            .await?)
    }

    /// Grants a permission directly to a user, returning false if already granted.
    pub async fn grant_to_user(&self, user_id: i32, permission_id: i32) -> Result<bool, Error> {
        self.ensure_user_exists(user_id).await?;
        self.ensure_permission_exists(permission_id).await?;

        let user_permission_repo = UserPermissionRepository::new(self.db);

        Ok(user_permission_repo.add(user_id, permission_id).await?)
    }

    /// Revokes a direct grant from a user, returning whether it existed.
    ///
    /// Permissions the user holds through a group are unaffected.
    pub async fn revoke_from_user(&self, user_id: i32, permission_id: i32) -> Result<bool, Error> {
        let user_permission_repo = UserPermissionRepository::new(self.db);

        Ok(user_permission_repo.remove(user_id, permission_id).await?)
    }

    /// Grants a permission to a group, returning false if already granted.
    pub async fn grant_to_group(&self, group_id: i32, permission_id: i32) -> Result<bool, Error> {
        let group_repo = GroupRepository::new(self.db);
        if group_repo.get_by_id(group_id).await?.is_none() {
            return Err(AuthError::GroupNotFound(group_id).into());
        }
        self.ensure_permission_exists(permission_id).await?;

        let group_permission_repo = GroupPermissionRepository::new(self.db);

        Ok(group_permission_repo.add(group_id, permission_id).await?)
    }

    /// Revokes a permission from a group, returning whether it was granted.
    pub async fn revoke_from_group(
        &self,
        group_id: i32,
        permission_id: i32,
    ) -> Result<bool, Error> {
        let group_permission_repo = GroupPermissionRepository::new(self.db);

        Ok(group_permission_repo.remove(group_id, permission_id).await?)
    }

    /// Gets every permission a user holds.
    ///
    /// Includes direct grants and grants held through group membership, each
    /// permission listed once, ordered by permission ID.
    pub async fn get_user_permissions(&self, user_id: i32) -> Result<Vec<PermissionModel>, Error> {
        self.ensure_user_exists(user_id).await?;

        let user_permission_repo = UserPermissionRepository::new(self.db);
        let user_group_repo = UserGroupRepository::new(self.db);
        let group_permission_repo = GroupPermissionRepository::new(self.db);

        let mut permissions: BTreeMap<i32, PermissionModel> = user_permission_repo
            .get_permissions_for_user(user_id)
            .await?
            .into_iter()
            .map(|permission| (permission.id, permission))
            .collect();

        for group in user_group_repo.get_groups_for_user(user_id).await? {
            for permission in group_permission_repo
                .get_permissions_for_group(group.id)
                .await?
            {
                permissions.entry(permission.id).or_insert(permission);
            }
        }

        Ok(permissions.into_values().collect())
    }

    /// Gets the permissions granted to a group, ordered by permission ID.
    pub async fn get_group_permissions(
        &self,
        group_id: i32,
    ) -> Result<Vec<PermissionModel>, Error> {
        let group_repo = GroupRepository::new(self.db);
        if group_repo.get_by_id(group_id).await?.is_none() {
            return Err(AuthError::GroupNotFound(group_id).into());
        }

        let group_permission_repo = GroupPermissionRepository::new(self.db);

        Ok(group_permission_repo
            .get_permissions_for_group(group_id)
            .await?)
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(AuthError::UserNotFound(user_id).into());
        }

        Ok(())
    }

    async fn ensure_permission_exists(&self, permission_id: i32) -> Result<(), Error> {
        let permission_repo = PermissionRepository::new(self.db);
        if permission_repo.get_by_id(permission_id).await?.is_none() {
            return Err(AuthError::PermissionNotFound(permission_id).into());
        }

        Ok(())
    }
}
