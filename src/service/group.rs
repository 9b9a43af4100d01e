//! Group service layer.
//!
//! Group creation and membership changes. Membership operations check that both
//! the user and the group exist before touching the junction table.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        group::GroupRepository,
        user::{user_group::UserGroupRepository, UserRepository},
    },
    error::{auth::AuthError, Error},
    model::{
        db::{GroupModel, UserModel},
        user::UserDto,
    },
};

/// Service for groups and user membership.
pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new instance of [`GroupService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group with a unique, non-empty name.
    ///
    /// # Returns
    /// - `Ok(GroupModel)` - The created group
    /// - `Err(Error::AuthError(AuthError::GroupNameRequired))` - Name was empty
    /// - `Err(Error::AuthError(AuthError::GroupNameTaken))` - Name already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_group(&self, name: &str) -> Result<GroupModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::GroupNameRequired.into());
        }

        let group_repo = GroupRepository::new(self.db);

        let (group, created) = group_repo.get_or_create(name).await?;
        if !created {
            return Err(AuthError::GroupNameTaken(group.name).into());
        }

        Ok(group)
    }

    /// Adds a user to a group.
    ///
    /// Adding a user that is already a member leaves a single membership.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership was created
    /// - `Ok(false)` - User was already a member
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - No user has this ID
    /// - `Err(Error::AuthError(AuthError::GroupNotFound))` - No group has this ID
    pub async fn add_user_to_group(&self, user_id: i32, group_id: i32) -> Result<bool, Error> {
        self.ensure_exists(user_id, group_id).await?;

        let user_group_repo = UserGroupRepository::new(self.db);

        Ok(user_group_repo.add(user_id, group_id).await?)
    }

    /// Removes a user from a group, returning whether a membership existed.
    pub async fn remove_user_from_group(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<bool, Error> {
        self.ensure_exists(user_id, group_id).await?;

        let user_group_repo = UserGroupRepository::new(self.db);

        Ok(user_group_repo.remove(user_id, group_id).await?)
    }

    /// Gets the groups of a user, ordered by group ID.
    pub async fn get_user_groups(&self, user_id: i32) -> Result<Vec<GroupModel>, Error> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(AuthError::UserNotFound(user_id).into());
        }

        let user_group_repo = UserGroupRepository::new(self.db);

        Ok(user_group_repo.get_groups_for_user(user_id).await?)
    }

    /// Gets the members of a group, ordered by user ID.
    pub async fn get_group_members(&self, group_id: i32) -> Result<Vec<UserDto>, Error> {
        let group_repo = GroupRepository::new(self.db);
        if group_repo.get_by_id(group_id).await?.is_none() {
            return Err(AuthError::GroupNotFound(group_id).into());
        }

        let user_group_repo = UserGroupRepository::new(self.db);
        let members: Vec<UserModel> = user_group_repo.get_users_in_group(group_id).await?;

        Ok(members.into_iter().map(UserDto::from).collect())
    }

    async fn ensure_exists(&self, user_id: i32, group_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);
        let group_repo = GroupRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(AuthError::UserNotFound(user_id).into());
        }
        if group_repo.get_by_id(group_id).await?.is_none() {
            return Err(AuthError::GroupNotFound(group_id).into());
        }

        Ok(())
    }
}
