//! Group membership of users.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::db::{GroupModel, UserModel};

/// Repository for the user group membership junction
///
/// A membership is a single row shared by both sides, so adding a group to a user
/// and adding a user to a group are the same operation.
pub struct UserGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserGroupRepository<'a, C> {
    /// Creates a new instance of [`UserGroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a user to a group
    ///
    /// # Returns
    /// - `Ok(true)` if the membership was created
    /// - `Ok(false)` if the user was already a member
    /// - `Err(DbErr)` if either side does not exist or the query fails
    pub async fn add(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        if self.contains(user_id, group_id).await? {
            return Ok(false);
        }

        entity::prelude::AuthUserGroups::insert(entity::auth_user_groups::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a user from a group, returning whether a membership existed
    pub async fn remove(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthUserGroups::delete_by_id((user_id, group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes a user from every group, returning the number of memberships removed
    pub async fn clear(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthUserGroups::delete_many()
            .filter(entity::auth_user_groups::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns whether the link exists
    pub async fn contains(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        Ok(
            entity::prelude::AuthUserGroups::find_by_id((user_id, group_id))
                .one(self.db)
                .await?
                .is_some(),
        )
    }

    /// Counts the links of a user
    pub async fn count_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::AuthUserGroups::find()
            .filter(entity::auth_user_groups::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Gets all groups the user is a member of, ordered by group ID
    pub async fn get_groups_for_user(&self, user_id: i32) -> Result<Vec<GroupModel>, DbErr> {
        entity::prelude::AuthGroup::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::auth_group::Relation::AuthUserGroups.def(),
            )
            .filter(entity::auth_user_groups::Column::UserId.eq(user_id))
            .order_by_asc(entity::auth_group::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all members of the group, ordered by user ID
    pub async fn get_users_in_group(&self, group_id: i32) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::AuthUser::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::auth_user::Relation::AuthUserGroups.def(),
            )
            .filter(entity::auth_user_groups::Column::GroupId.eq(group_id))
            .order_by_asc(entity::auth_user::Column::Id)
            .all(self.db)
            .await
    }
}
