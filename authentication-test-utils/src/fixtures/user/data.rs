use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    constant::TEST_UNUSABLE_PASSWORD,
    error::TestError,
    model::{GroupModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with `<username>@example.com` as email and an unusable password.
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::AuthUser::insert(entity::auth_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password: ActiveValue::Set(TEST_UNUSABLE_PASSWORD.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", username)),
                first_name: ActiveValue::Set(String::new()),
                last_name: ActiveValue::Set(String::new()),
                is_staff: ActiveValue::Set(false),
                is_active: ActiveValue::Set(true),
                is_superuser: ActiveValue::Set(false),
                last_login: ActiveValue::Set(None),
                date_joined: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Look up a user by username, failing when the fixture was never inserted.
    pub async fn get_user(&self, username: &str) -> Result<UserModel, TestError> {
        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Username.eq(username))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| TestError::FixtureNotFound(format!("user {}", username)))
    }

    /// Insert a user together with a new group and link them.
    pub async fn insert_user_in_group(
        &self,
        username: &str,
        group_name: &str,
    ) -> Result<(UserModel, GroupModel), TestError> {
        let user_model = self.insert_user(username).await?;
        let group_model = self.setup.group().insert_group(group_name).await?;
        self.setup
            .group()
            .add_user(user_model.id, group_model.id)
            .await?;

        Ok((user_model, group_model))
    }

    pub async fn grant_permission(&self, user_id: i32, permission_id: i32) -> Result<(), TestError> {
        entity::prelude::AuthUserUserPermissions::insert(
            entity::auth_user_user_permissions::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                permission_id: ActiveValue::Set(permission_id),
            },
        )
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }
}
