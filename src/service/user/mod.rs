//! User service layer.
//!
//! Creation, lookup, saving and password management of users. Usernames and emails
//! are normalized and passwords hashed here; the repositories store what they are given.

#[cfg(test)]
mod tests;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        db::UserModel,
        user::{NewUser, UserDto},
    },
    util::{
        normalize::{normalize_email, normalize_username},
        password::{hash_password, make_unusable_password, verify_password},
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a regular user.
    ///
    /// The username is NFKC normalized and the email domain lowercased before
    /// storing. Without a password the user gets an unusable one and cannot log in
    /// until [`UserService::set_password`] is called.
    ///
    /// # Arguments
    /// - `username` - Login name, must not be empty
    /// - `email` - Email address, may be empty
    /// - `password` - Raw password to hash, or `None`
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::AuthError(AuthError::UsernameRequired))` - Username was empty
    /// - `Err(Error::AuthError(AuthError::UsernameTaken))` - Username already exists
    /// - `Err(Error::PasswordHashError)` - Password hashing failed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: Option<&str>,
    ) -> Result<UserModel, Error> {
        self.create(username, email, password, false).await
    }

    /// Creates a user with both the staff and superuser flags set.
    ///
    /// Follows the same validation as [`UserService::create_user`].
    pub async fn create_superuser(
        &self,
        username: &str,
        email: &str,
        password: Option<&str>,
    ) -> Result<UserModel, Error> {
        self.create(username, email, password, true).await
    }

    async fn create(
        &self,
        username: &str,
        email: &str,
        password: Option<&str>,
        superuser: bool,
    ) -> Result<UserModel, Error> {
        let username = normalize_username(username);
        if username.is_empty() {
            return Err(AuthError::UsernameRequired.into());
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_username(&username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username).into());
        }

        let password = match password {
            Some(raw_password) => hash_password(raw_password)?,
            None => make_unusable_password(),
        };

        let user = user_repo
            .create(NewUser {
                username,
                password,
                email: normalize_email(email),
                is_staff: superuser,
                is_superuser: superuser,
            })
            .await?;

        tracing::debug!(user_id = user.id, superuser, "Created user {}", user.username);

        Ok(user)
    }

    /// Retrieves a user without its password.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - No user has this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?.map(UserDto::from))
    }

    /// Retrieves a user by username, normalizing the lookup the same way as creation.
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo
            .get_by_username(&normalize_username(username))
            .await?
            .map(UserDto::from))
    }

    /// Writes every field of the user back to the database.
    ///
    /// The save is logged on the `users.models` target before and after the write.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The saved user
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - The user row no longer exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn save(&self, user: UserModel) -> Result<UserModel, Error> {
        let user_id = user.id;
        let user_repo = UserRepository::new(self.db);

        match user_repo.save(user).await {
            Ok(user) => Ok(user),
            Err(DbErr::RecordNotUpdated) => Err(AuthError::UserNotFound(user_id).into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces the password of a user.
    ///
    /// `None` marks the password unusable.
    pub async fn set_password(
        &self,
        user_id: i32,
        password: Option<&str>,
    ) -> Result<UserModel, Error> {
        let password = match password {
            Some(raw_password) => hash_password(raw_password)?,
            None => make_unusable_password(),
        };

        let user_repo = UserRepository::new(self.db);

        user_repo
            .update_password(user_id, password)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(user_id).into())
    }

    /// Checks a raw password against the stored hash of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match or the stored password is unusable
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - No user has this ID
    /// - `Err(Error::PasswordHashError)` - The stored hash could not be parsed
    pub async fn check_password(&self, user_id: i32, raw_password: &str) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        verify_password(raw_password, &user.password)
    }

    /// Stamps the current time as the last login of a user.
    pub async fn record_login(&self, user_id: i32) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .update_last_login(user_id, Utc::now().naive_utc())
            .await?
            .ok_or_else(|| AuthError::UserNotFound(user_id).into())
    }

    /// Deletes a user along with its group memberships and permission grants.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - No user has this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);

        let result = user_repo.delete(user_id).await?;

        if result.rows_affected > 0 {
            tracing::debug!(user_id, "Deleted user");
        }

        Ok(result.rows_affected > 0)
    }
}
