use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RailwayUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RailwayUser::Id))
                    .col(string_uniq(RailwayUser::Email))
                    .col(string(RailwayUser::PasswordHash))
                    .col(timestamp(RailwayUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RailwayUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RailwayUser {
    Table,
    Id,
    Email,
    PasswordHash,
    CreatedAt,
}
