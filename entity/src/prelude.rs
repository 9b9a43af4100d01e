pub use super::auth_group::Entity as AuthGroup;
pub use super::auth_group_permissions::Entity as AuthGroupPermissions;
pub use super::auth_permission::Entity as AuthPermission;
pub use super::auth_user::Entity as AuthUser;
pub use super::auth_user_groups::Entity as AuthUserGroups;
pub use super::auth_user_user_permissions::Entity as AuthUserUserPermissions;
