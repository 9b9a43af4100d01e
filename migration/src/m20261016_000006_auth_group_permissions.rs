use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261016_000002_auth_group::AuthGroup, m20261016_000003_auth_permission::AuthPermission,
};

static IDX_GROUP_PERMISSIONS_PERMISSION_ID: &str = "idx-auth_group_permissions-permission_id";
static FK_GROUP_PERMISSIONS_GROUP_ID: &str = "fk-auth_group_permissions-group_id";
static FK_GROUP_PERMISSIONS_PERMISSION_ID: &str = "fk-auth_group_permissions-permission_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthGroupPermissions::Table)
                    .if_not_exists()
                    .col(integer(AuthGroupPermissions::GroupId))
                    .col(integer(AuthGroupPermissions::PermissionId))
                    .primary_key(
                        Index::create()
                            .col(AuthGroupPermissions::GroupId)
                            .col(AuthGroupPermissions::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROUP_PERMISSIONS_GROUP_ID)
                            .from_tbl(AuthGroupPermissions::Table)
                            .from_col(AuthGroupPermissions::GroupId)
                            .to_tbl(AuthGroup::Table)
                            .to_col(AuthGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROUP_PERMISSIONS_PERMISSION_ID)
                            .from_tbl(AuthGroupPermissions::Table)
                            .from_col(AuthGroupPermissions::PermissionId)
                            .to_tbl(AuthPermission::Table)
                            .to_col(AuthPermission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GROUP_PERMISSIONS_PERMISSION_ID)
                    .table(AuthGroupPermissions::Table)
                    .col(AuthGroupPermissions::PermissionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GROUP_PERMISSIONS_PERMISSION_ID)
                    .table(AuthGroupPermissions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuthGroupPermissions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuthGroupPermissions {
    Table,
    GroupId,
    PermissionId,
}
