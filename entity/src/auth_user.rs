use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

/// Log target used by the user save hook.
pub const LOG_TARGET: &str = "users.models";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTime>,
    pub date_joined: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_user_groups::Entity")]
    AuthUserGroups,
    #[sea_orm(has_many = "super::auth_user_user_permissions::Entity")]
    AuthUserUserPermissions,
}

impl Related<super::auth_user_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUserGroups.def()
    }
}

impl Related<super::auth_user_user_permissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUserUserPermissions.def()
    }
}

impl Related<super::auth_group::Entity> for Entity {
    fn to() -> RelationDef {
        super::auth_user_groups::Relation::AuthGroup.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::auth_user_groups::Relation::AuthUser.def().rev())
    }
}

impl Related<super::auth_permission::Entity> for Entity {
    fn to() -> RelationDef {
        super::auth_user_user_permissions::Relation::AuthPermission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::auth_user_user_permissions::Relation::AuthUser.def().rev())
    }
}

/// Logs every save of a user made through the `ActiveModel` API.
///
/// Inserts and updates both pass through here. Rows written with
/// `Entity::insert` or raw statements skip the hook.
#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let username = match &self.username {
            ActiveValue::Set(username) | ActiveValue::Unchanged(username) => username.as_str(),
            ActiveValue::NotSet => "",
        };
        tracing::info!(target: LOG_TARGET, "Saving user instance: {}", username);

        Ok(self)
    }

    async fn after_save<C>(
        model: <Self::Entity as EntityTrait>::Model,
        _db: &C,
        _insert: bool,
    ) -> Result<<Self::Entity as EntityTrait>::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        tracing::info!(
            target: LOG_TARGET,
            "User instance saved successfully: {}",
            model.username
        );

        Ok(model)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
