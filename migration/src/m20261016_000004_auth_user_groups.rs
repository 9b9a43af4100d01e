use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261016_000001_auth_user::AuthUser, m20261016_000002_auth_group::AuthGroup};

static IDX_USER_GROUPS_GROUP_ID: &str = "idx-auth_user_groups-group_id";
static FK_USER_GROUPS_USER_ID: &str = "fk-auth_user_groups-user_id";
static FK_USER_GROUPS_GROUP_ID: &str = "fk-auth_user_groups-group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline since SQLite cannot add them with ALTER TABLE
        manager
            .create_table(
                Table::create()
                    .table(AuthUserGroups::Table)
                    .if_not_exists()
                    .col(integer(AuthUserGroups::UserId))
                    .col(integer(AuthUserGroups::GroupId))
                    .primary_key(
                        Index::create()
                            .col(AuthUserGroups::UserId)
                            .col(AuthUserGroups::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_GROUPS_USER_ID)
                            .from_tbl(AuthUserGroups::Table)
                            .from_col(AuthUserGroups::UserId)
                            .to_tbl(AuthUser::Table)
                            .to_col(AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_GROUPS_GROUP_ID)
                            .from_tbl(AuthUserGroups::Table)
                            .from_col(AuthUserGroups::GroupId)
                            .to_tbl(AuthGroup::Table)
                            .to_col(AuthGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_GROUPS_GROUP_ID)
                    .table(AuthUserGroups::Table)
                    .col(AuthUserGroups::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_GROUPS_GROUP_ID)
                    .table(AuthUserGroups::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuthUserGroups::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuthUserGroups {
    Table,
    UserId,
    GroupId,
}
