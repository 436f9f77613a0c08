use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000006_journey::Journey, m20251101_000009_order::Order};

// At most one ticket per (cargo, seat, journey)
static IDX_TICKET_CARGO_SEAT_JOURNEY: &str = "idx_ticket_cargo_seat_journey";
static IDX_TICKET_ORDER_ID: &str = "idx-ticket-order_id";
static FK_TICKET_JOURNEY_ID: &str = "fk-ticket-journey_id";
static FK_TICKET_ORDER_ID: &str = "fk-ticket-order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::Cargo))
                    .col(integer(Ticket::Seat))
                    .col(integer(Ticket::JourneyId))
                    .col(integer(Ticket::OrderId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_CARGO_SEAT_JOURNEY)
                    .table(Ticket::Table)
                    .col(Ticket::Cargo)
                    .col(Ticket::Seat)
                    .col(Ticket::JourneyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_ORDER_ID)
                    .table(Ticket::Table)
                    .col(Ticket::OrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_JOURNEY_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::JourneyId)
                    .to_tbl(Journey::Table)
                    .to_col(Journey::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_ORDER_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::OrderId)
                    .to_tbl(Order::Table)
                    .to_col(Order::Id)
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
                    .name(FK_TICKET_ORDER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_JOURNEY_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_ORDER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_CARGO_SEAT_JOURNEY)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ticket {
    Table,
    Id,
    Cargo,
    Seat,
    JourneyId,
    OrderId,
}
