use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_route::Route, m20251101_000004_train::Train};

static IDX_JOURNEY_DEPARTURE_TIME: &str = "idx-journey-departure_time";
static IDX_JOURNEY_ARRIVAL_TIME: &str = "idx-journey-arrival_time";
static FK_JOURNEY_ROUTE_ID: &str = "fk-journey-route_id";
static FK_JOURNEY_TRAIN_ID: &str = "fk-journey-train_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Journey::Table)
                    .if_not_exists()
                    .col(pk_auto(Journey::Id))
                    .col(integer(Journey::RouteId))
                    .col(integer(Journey::TrainId))
                    .col(timestamp(Journey::DepartureTime))
                    .col(timestamp(Journey::ArrivalTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOURNEY_DEPARTURE_TIME)
                    .table(Journey::Table)
                    .col(Journey::DepartureTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOURNEY_ARRIVAL_TIME)
                    .table(Journey::Table)
                    .col(Journey::ArrivalTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOURNEY_ROUTE_ID)
                    .from_tbl(Journey::Table)
                    .from_col(Journey::RouteId)
                    .to_tbl(Route::Table)
                    .to_col(Route::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOURNEY_TRAIN_ID)
                    .from_tbl(Journey::Table)
                    .from_col(Journey::TrainId)
                    .to_tbl(Train::Table)
                    .to_col(Train::Id)
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
                    .name(FK_JOURNEY_TRAIN_ID)
                    .table(Journey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_JOURNEY_ROUTE_ID)
                    .table(Journey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOURNEY_ARRIVAL_TIME)
                    .table(Journey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOURNEY_DEPARTURE_TIME)
                    .table(Journey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Journey::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Journey {
    Table,
    Id,
    RouteId,
    TrainId,
    DepartureTime,
    ArrivalTime,
}
