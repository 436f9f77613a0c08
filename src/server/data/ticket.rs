//! Tickets and the booked-seat queries built on them.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    sea_query::JoinType,
};

use crate::{
    model::order::TicketRequest,
    server::{
        data::journey::JourneyRepository,
        error::{conflict::ConflictError, validation::ValidationError, Error},
        model::db::TicketModel,
        util::capacity::TrainCapacity,
    },
};

/// Queries on tickets, usable on a pool or inside a transaction
pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves a ticket for `order_id`
    ///
    /// The seat is checked against the capacity of the journey's train before anything is
    /// written, so no code path can store a ticket for a seat that does not exist.
    ///
    /// # Returns
    /// - `Ok(TicketModel)` - The stored ticket
    /// - `Err(Error::ValidationError)` - Unknown journey, or seat/cargo out of range
    /// - `Err(Error::ConflictError(ConflictError::SeatTaken))` - The seat is already booked
    /// - `Err(Error::DbErr)` - Any other storage failure
    pub async fn create(&self, order_id: i32, ticket: TicketRequest) -> Result<TicketModel, Error> {
        let Some(capacity) = JourneyRepository::new(self.db)
            .capacity(ticket.journey)
            .await?
        else {
            return Err(ValidationError::UnknownReference {
                field: "journey",
                id: ticket.journey,
            }
            .into());
        };

        capacity.check(ticket.cargo, ticket.seat)?;

        let ticket_am = entity::ticket::ActiveModel {
            cargo: ActiveValue::Set(ticket.cargo),
            seat: ActiveValue::Set(ticket.seat),
            journey_id: ActiveValue::Set(ticket.journey),
            order_id: ActiveValue::Set(order_id),
            ..Default::default()
        };

        ticket_am.insert(self.db).await.map_err(|err| {
            ConflictError::SeatTaken {
                cargo: ticket.cargo,
                seat: ticket.seat,
                journey: ticket.journey,
            }
            .on_unique_violation(err)
        })
    }

    /// Whether the seat is already booked for the journey
    pub async fn is_taken(&self, ticket: TicketRequest) -> Result<bool, DbErr> {
        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::JourneyId.eq(ticket.journey))
            .filter(entity::ticket::Column::Cargo.eq(ticket.cargo))
            .filter(entity::ticket::Column::Seat.eq(ticket.seat))
            .count(self.db)
            .await?;

        Ok(tickets > 0)
    }

    /// Highest booked cargo and seat across every journey run by the train
    pub async fn booked_extent_for_train(
        &self,
        train_id: i32,
    ) -> Result<Option<TrainCapacity>, DbErr> {
        self.booked_extent(
            entity::prelude::Ticket::find()
                .join(JoinType::InnerJoin, entity::ticket::Relation::Journey.def())
                .filter(entity::journey::Column::TrainId.eq(train_id)),
        )
        .await
    }

    /// Highest booked cargo and seat of a journey
    pub async fn booked_extent_for_journey(
        &self,
        journey_id: i32,
    ) -> Result<Option<TrainCapacity>, DbErr> {
        self.booked_extent(
            entity::prelude::Ticket::find()
                .filter(entity::ticket::Column::JourneyId.eq(journey_id)),
        )
        .await
    }

    /// Smallest capacity that still holds every ticket matched by `query`, `None` without tickets
    async fn booked_extent(
        &self,
        query: Select<entity::ticket::Entity>,
    ) -> Result<Option<TrainCapacity>, DbErr> {
        let extent = query
            .select_only()
            .column_as(entity::ticket::Column::Cargo.max(), "cargo")
            .column_as(entity::ticket::Column::Seat.max(), "seat")
            .into_tuple::<(Option<i32>, Option<i32>)>()
            .one(self.db)
            .await?;

        Ok(match extent {
            Some((Some(cargo_num), Some(places_in_cargo))) => Some(TrainCapacity {
                cargo_num,
                places_in_cargo,
            }),
            _ => None,
        })
    }

    /// Tickets of a journey ordered by cargo then seat
    pub async fn list_for_journey(&self, journey_id: i32) -> Result<Vec<TicketModel>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::JourneyId.eq(journey_id))
            .order_by_asc(entity::ticket::Column::Cargo)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await
    }

    /// Tickets of the given orders, each order's tickets ordered by cargo then seat
    pub async fn list_for_orders(&self, order_ids: &[i32]) -> Result<Vec<TicketModel>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::OrderId.is_in(order_ids.to_vec()))
            .order_by_asc(entity::ticket::Column::OrderId)
            .order_by_asc(entity::ticket::Column::Cargo)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await
    }
}
