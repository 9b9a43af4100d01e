pub use sea_orm_migration::prelude::*;

mod m20261016_000001_auth_user;
mod m20261016_000002_auth_group;
mod m20261016_000003_auth_permission;
mod m20261016_000004_auth_user_groups;
mod m20261016_000005_auth_user_user_permissions;
mod m20261016_000006_auth_group_permissions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_auth_user::Migration),
            Box::new(m20261016_000002_auth_group::Migration),
            Box::new(m20261016_000003_auth_permission::Migration),
            Box::new(m20261016_000004_auth_user_groups::Migration),
            Box::new(m20261016_000005_auth_user_user_permissions::Migration),
            Box::new(m20261016_000006_auth_group_permissions::Migration),
        ]
    }
}
