//! Group repository.

pub mod group_permission;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::model::db::GroupModel;

/// Repository for the `auth_group` table
pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new instance of [`GroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new group
    pub async fn create(&self, name: String) -> Result<GroupModel, DbErr> {
        let group = entity::auth_group::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        group.insert(self.db).await
    }

    /// Gets a row by ID
    pub async fn get_by_id(&self, group_id: i32) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::AuthGroup::find_by_id(group_id)
            .one(self.db)
            .await
    }

    /// Gets a group by exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::AuthGroup::find()
            .filter(entity::auth_group::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets the group with the provided name, creating it if it doesn't exist
    ///
    /// # Returns
    /// - `(GroupModel, true)` if the group was created
    /// - `(GroupModel, false)` if it already existed
    pub async fn get_or_create(&self, name: &str) -> Result<(GroupModel, bool), DbErr> {
        if let Some(group) = self.get_by_name(name).await? {
            return Ok((group, false));
        }

        let group = self.create(name.to_string()).await?;

        Ok((group, true))
    }

    /// Deletes a group
    ///
    /// Memberships and permission grants of the group are removed by cascade. Check
    /// [`DeleteResult::rows_affected`] to tell whether the group existed.
    pub async fn delete(&self, group_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AuthGroup::delete_by_id(group_id)
            .exec(self.db)
            .await
    }
}
