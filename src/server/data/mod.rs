//! Data access layer repositories.
//!
//! One repository per table, each generic over [`sea_orm::ConnectionTrait`] so the same code
//! runs on the connection pool or inside a transaction. Repositories return raw
//! [`sea_orm::DbErr`]s, except [`ticket::TicketRepository`] which enforces seat bounds before
//! writing.

pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod user;
