use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Index, IndexCreateStatement};

/// Name of the unique index guarding against two tickets for the same seat of a journey.
pub const SEAT_UNIQUE_INDEX: &str = "idx_ticket_cargo_seat_journey";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cargo: i32,
    pub seat: i32,
    pub journey_id: i32,
    pub order_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::journey::Entity",
        from = "Column::JourneyId",
        to = "super::journey::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Journey,
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journey.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Unique index over `(cargo, seat, journey_id)`.
///
/// Entity-derived schemas do not carry composite unique keys, so this statement is
/// executed alongside the table when the schema is built from entities.
pub fn seat_unique_index() -> IndexCreateStatement {
    Index::create()
        .name(SEAT_UNIQUE_INDEX)
        .table(Entity)
        .col(Column::Cargo)
        .col(Column::Seat)
        .col(Column::JourneyId)
        .unique()
        .if_not_exists()
        .to_owned()
}
