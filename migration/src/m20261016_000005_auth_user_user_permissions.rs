use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261016_000001_auth_user::AuthUser, m20261016_000003_auth_permission::AuthPermission,
};

static IDX_USER_PERMISSIONS_PERMISSION_ID: &str = "idx-auth_user_user_permissions-permission_id";
static FK_USER_PERMISSIONS_USER_ID: &str = "fk-auth_user_user_permissions-user_id";
static FK_USER_PERMISSIONS_PERMISSION_ID: &str = "fk-auth_user_user_permissions-permission_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthUserUserPermissions::Table)
                    .if_not_exists()
                    .col(integer(AuthUserUserPermissions::UserId))
                    .col(integer(AuthUserUserPermissions::PermissionId))
                    .primary_key(
                        Index::create()
                            .col(AuthUserUserPermissions::UserId)
                            .col(AuthUserUserPermissions::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PERMISSIONS_USER_ID)
                            .from_tbl(AuthUserUserPermissions::Table)
                            .from_col(AuthUserUserPermissions::UserId)
                            .to_tbl(AuthUser::Table)
                            .to_col(AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PERMISSIONS_PERMISSION_ID)
                            .from_tbl(AuthUserUserPermissions::Table)
                            .from_col(AuthUserUserPermissions::PermissionId)
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
                    .name(IDX_USER_PERMISSIONS_PERMISSION_ID)
                    .table(AuthUserUserPermissions::Table)
                    .col(AuthUserUserPermissions::PermissionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_PERMISSIONS_PERMISSION_ID)
                    .table(AuthUserUserPermissions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(AuthUserUserPermissions::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuthUserUserPermissions {
    Table,
    UserId,
    PermissionId,
}
