use std::fmt;

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_user_groups::Entity")]
    AuthUserGroups,
    #[sea_orm(has_many = "super::auth_group_permissions::Entity")]
    AuthGroupPermissions,
}

impl Related<super::auth_user_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUserGroups.def()
    }
}

impl Related<super::auth_group_permissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthGroupPermissions.def()
    }
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        super::auth_user_groups::Relation::AuthUser.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::auth_user_groups::Relation::AuthGroup.def().rev())
    }
}

impl Related<super::auth_permission::Entity> for Entity {
    fn to() -> RelationDef {
        super::auth_group_permissions::Relation::AuthPermission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::auth_group_permissions::Relation::AuthGroup.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
