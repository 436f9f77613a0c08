//! Orders and the atomic booking of their tickets.

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderReadDto, OrderTicketDto, TicketDto},
    server::{
        data::{
            journey::{JourneyRecord, JourneyRepository},
            order::OrderRepository,
            ticket::TicketRepository,
        },
        error::{conflict::ConflictError, validation::ValidationError, Error},
        model::{
            db::{OrderModel, TicketModel},
            identity::Identity,
        },
        projection::format,
        util::{capacity::TrainCapacity, time::format_timestamp},
    },
};

const RESOURCE: &str = "order";

/// Booking of tickets and access to the caller's orders
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books every requested seat under a new order owned by the caller
    ///
    /// Every ticket is validated before anything is written. The order and its tickets are
    /// then inserted in a single transaction, so either all seats are booked or none are.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - The created order with its ticket IDs
    /// - `Err(Error::AuthError)` - The caller is anonymous
    /// - `Err(Error::ValidationError)` - No tickets, unknown journey, or seat/cargo out of range
    /// - `Err(Error::ConflictError(ConflictError::SeatTaken))` - A seat is requested twice or
    ///   already booked, including by a concurrent order that committed first
    pub async fn create_order(
        &self,
        identity: &Identity,
        request: CreateOrderDto,
    ) -> Result<OrderDto, Error> {
        let user = identity.require()?;

        if request.tickets.is_empty() {
            return Err(ValidationError::EmptyOrder.into());
        }

        self.validate_tickets(&request).await?;

        let txn = self.db.begin().await?;

        let order = OrderRepository::new(&txn).create(user.id).await?;

        let ticket_repo = TicketRepository::new(&txn);
        let mut tickets = Vec::with_capacity(request.tickets.len());
        for ticket in &request.tickets {
            tickets.push(ticket_repo.create(order.id, *ticket).await?);
        }

        txn.commit().await?;

        tracing::debug!(
            user_id = %user.id,
            order_id = %order.id,
            tickets = tickets.len(),
            "Order created"
        );

        Ok(OrderDto {
            id: order.id,
            created_at: order.created_at,
            user: order.user_id,
            tickets: tickets.into_iter().map(ticket_dto).collect(),
        })
    }

    /// Orders of the caller, newest first
    pub async fn list(&self, identity: &Identity) -> Result<Vec<OrderReadDto>, Error> {
        let user = identity.require()?;

        let orders = OrderRepository::new(self.db)
            .list_for_user(user.id)
            .await?;

        self.read(orders).await
    }

    /// One order of the caller; orders of other users are reported as not found
    pub async fn get(&self, identity: &Identity, order_id: i32) -> Result<OrderReadDto, Error> {
        let user = identity.require()?;

        let Some(order) = OrderRepository::new(self.db)
            .get_for_user(order_id, user.id)
            .await?
        else {
            return Err(Error::not_found(RESOURCE, order_id));
        };

        self.read(vec![order])
            .await?
            .pop()
            .ok_or_else(|| Error::not_found(RESOURCE, order_id))
    }

    /// Deletes an order of the caller together with its tickets
    pub async fn delete(&self, identity: &Identity, order_id: i32) -> Result<(), Error> {
        let user = identity.require()?;

        let result = OrderRepository::new(self.db)
            .delete_for_user(order_id, user.id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::not_found(RESOURCE, order_id));
        }

        Ok(())
    }

    /// Checks every requested ticket without writing anything
    ///
    /// Tickets are checked in request order and the first failure is reported.
    async fn validate_tickets(&self, request: &CreateOrderDto) -> Result<(), Error> {
        let journey_repo = JourneyRepository::new(self.db);
        let ticket_repo = TicketRepository::new(self.db);

        let mut capacities: HashMap<i32, TrainCapacity> = HashMap::new();
        let mut requested = HashSet::new();

        for ticket in &request.tickets {
            let capacity = match capacities.get(&ticket.journey) {
                Some(capacity) => *capacity,
                None => {
                    let Some(capacity) = journey_repo.capacity(ticket.journey).await? else {
                        return Err(ValidationError::UnknownReference {
                            field: "journey",
                            id: ticket.journey,
                        }
                        .into());
                    };
                    capacities.insert(ticket.journey, capacity);
                    capacity
                }
            };

            capacity.check(ticket.cargo, ticket.seat)?;

            if !requested.insert(*ticket) || ticket_repo.is_taken(*ticket).await? {
                return Err(ConflictError::SeatTaken {
                    cargo: ticket.cargo,
                    seat: ticket.seat,
                    journey: ticket.journey,
                }
                .into());
            }
        }

        Ok(())
    }

    async fn read(&self, orders: Vec<OrderModel>) -> Result<Vec<OrderReadDto>, Error> {
        let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
        let tickets = TicketRepository::new(self.db)
            .list_for_orders(&order_ids)
            .await?;

        let mut journey_ids: Vec<i32> = tickets.iter().map(|ticket| ticket.journey_id).collect();
        journey_ids.sort_unstable();
        journey_ids.dedup();

        let journey_repo = JourneyRepository::new(self.db);
        let journeys = journey_repo.get_many(&journey_ids).await?;
        let records: HashMap<i32, JourneyRecord> = journey_repo
            .records(journeys)
            .await?
            .into_iter()
            .map(|record| (record.journey.id, record))
            .collect();

        let mut tickets_by_order: HashMap<i32, Vec<OrderTicketDto>> = HashMap::new();
        for ticket in tickets {
            let record = records.get(&ticket.journey_id).ok_or_else(|| {
                Error::InternalError(format!(
                    "journey {} missing for ticket {}",
                    ticket.journey_id, ticket.id
                ))
            })?;

            tickets_by_order
                .entry(ticket.order_id)
                .or_default()
                .push(OrderTicketDto {
                    id: ticket.id,
                    journey: format::journey_label(
                        &record.source,
                        &record.destination,
                        &record.train.name,
                    ),
                    cargo: ticket.cargo,
                    seat: ticket.seat,
                    departure_time: format_timestamp(record.journey.departure_time),
                    arrival_time: format_timestamp(record.journey.arrival_time),
                });
        }

        Ok(orders
            .into_iter()
            .map(|order| OrderReadDto {
                id: order.id,
                created_at: format_timestamp(order.created_at),
                tickets: tickets_by_order.remove(&order.id).unwrap_or_default(),
            })
            .collect())
    }
}

fn ticket_dto(ticket: TicketModel) -> TicketDto {
    TicketDto {
        id: ticket.id,
        cargo: ticket.cargo,
        seat: ticket.seat,
        journey: ticket.journey_id,
    }
}
