use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_station::Station;

static IDX_ROUTE_SOURCE_DESTINATION: &str = "idx-route-source_id-destination_id";
static FK_ROUTE_SOURCE_ID: &str = "fk-route-source_id";
static FK_ROUTE_DESTINATION_ID: &str = "fk-route-destination_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Route::Table)
                    .if_not_exists()
                    .col(pk_auto(Route::Id))
                    .col(integer(Route::SourceId))
                    .col(integer(Route::DestinationId))
                    .col(double(Route::Distance))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROUTE_SOURCE_DESTINATION)
                    .table(Route::Table)
                    .col(Route::SourceId)
                    .col(Route::DestinationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROUTE_SOURCE_ID)
                    .from_tbl(Route::Table)
                    .from_col(Route::SourceId)
                    .to_tbl(Station::Table)
                    .to_col(Station::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROUTE_DESTINATION_ID)
                    .from_tbl(Route::Table)
                    .from_col(Route::DestinationId)
                    .to_tbl(Station::Table)
                    .to_col(Station::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROUTE_DESTINATION_ID)
                    .table(Route::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROUTE_SOURCE_ID)
                    .table(Route::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROUTE_SOURCE_DESTINATION)
                    .table(Route::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Route::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Route {
    Table,
    Id,
    SourceId,
    DestinationId,
    Distance,
}
