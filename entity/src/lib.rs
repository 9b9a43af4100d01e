pub mod prelude;

pub mod auth_group;
pub mod auth_group_permissions;
pub mod auth_permission;
pub mod auth_user;
pub mod auth_user_groups;
pub mod auth_user_user_permissions;
