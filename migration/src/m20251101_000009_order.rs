use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000008_railway_user::RailwayUser;

static IDX_ORDER_USER_ID_CREATED_AT: &str = "idx-order-user_id-created_at";
static FK_ORDER_USER_ID: &str = "fk-order-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(timestamp(Order::CreatedAt))
                    .col(integer(Order::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_USER_ID_CREATED_AT)
                    .table(Order::Table)
                    .col(Order::UserId)
                    .col(Order::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_USER_ID)
                    .from_tbl(Order::Table)
                    .from_col(Order::UserId)
                    .to_tbl(RailwayUser::Table)
                    .to_col(RailwayUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_USER_ID)
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_USER_ID_CREATED_AT)
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    CreatedAt,
    UserId,
}
