use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, model::GroupModel, TestContext};

impl TestContext {
    pub fn group(&self) -> GroupFixtures<'_> {
        GroupFixtures { setup: self }
    }
}

pub struct GroupFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> GroupFixtures<'a> {
    pub async fn insert_group(&self, name: &str) -> Result<GroupModel, TestError> {
        Ok(
            entity::prelude::AuthGroup::insert(entity::auth_group::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn get_group(&self, name: &str) -> Result<GroupModel, TestError> {
        entity::prelude::AuthGroup::find()
            .filter(entity::auth_group::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| TestError::FixtureNotFound(format!("group {}", name)))
    }

    /// Link a user to a group through the membership junction table.
    pub async fn add_user(&self, user_id: i32, group_id: i32) -> Result<(), TestError> {
        entity::prelude::AuthUserGroups::insert(entity::auth_user_groups::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    pub async fn grant_permission(
        &self,
        group_id: i32,
        permission_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::AuthGroupPermissions::insert(entity::auth_group_permissions::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            permission_id: ActiveValue::Set(permission_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }
}
