//! User repository and the repositories for its group and permission links.

pub mod user_group;
pub mod user_permission;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::{db::UserModel, user::NewUser};

/// Repository for the `auth_user` table
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// The insert goes through the `ActiveModel` API so the user save hook runs.
    pub async fn create(&self, new_user: NewUser) -> Result<UserModel, DbErr> {
        let user = entity::auth_user::ActiveModel {
            username: ActiveValue::Set(new_user.username),
            password: ActiveValue::Set(new_user.password),
            email: ActiveValue::Set(new_user.email),
            first_name: ActiveValue::Set(String::new()),
            last_name: ActiveValue::Set(String::new()),
            is_staff: ActiveValue::Set(new_user.is_staff),
            is_active: ActiveValue::Set(true),
            is_superuser: ActiveValue::Set(new_user.is_superuser),
            last_login: ActiveValue::Set(None),
            date_joined: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a row by ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::AuthUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets a user by exact username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Writes every field of the provided model back to its row
    ///
    /// All columns are marked as changed so the update is a full-row write, and the
    /// user save hook runs around it.
    pub async fn save(&self, user: UserModel) -> Result<UserModel, DbErr> {
        user.into_active_model().reset_all().update(self.db).await
    }

    /// Replaces the stored password of a user
    ///
    /// # Arguments
    /// - `user_id`: The ID of the user to update
    /// - `password`: Already hashed (or unusable) password value
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` if the user was updated
    /// - `Ok(None)` if no user has this ID
    pub async fn update_password(
        &self,
        user_id: i32,
        password: String,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match self.get_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.password = ActiveValue::Set(password);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Sets the last login timestamp of a user, returning None if the user doesn't exist
    pub async fn update_last_login(
        &self,
        user_id: i32,
        last_login: NaiveDateTime,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match self.get_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.last_login = ActiveValue::Set(Some(last_login));

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Group and permission links of the user are removed by cascade. Returns OK
    /// regardless of user existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AuthUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
