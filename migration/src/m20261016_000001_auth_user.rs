use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthUser::Id))
                    .col(string_len_uniq(AuthUser::Username, 150))
                    .col(string_len(AuthUser::Password, 128))
                    .col(string_len(AuthUser::Email, 254))
                    .col(string_len(AuthUser::FirstName, 150))
                    .col(string_len(AuthUser::LastName, 150))
                    .col(boolean(AuthUser::IsStaff))
                    .col(boolean(AuthUser::IsActive))
                    .col(boolean(AuthUser::IsSuperuser))
                    .col(timestamp_null(AuthUser::LastLogin))
                    .col(timestamp(AuthUser::DateJoined))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthUser {
    Table,
    Id,
    Username,
    Password,
    Email,
    FirstName,
    LastName,
    IsStaff,
    IsActive,
    IsSuperuser,
    LastLogin,
    DateJoined,
}
