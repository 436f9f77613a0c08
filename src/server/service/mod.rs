//! Service layer for business logic.
//!
//! Services validate input, enforce the deletion policy and compose repositories into the
//! read projections. Controllers resolve the caller's [`Identity`](crate::server::model::identity::Identity)
//! and pass it explicitly to the services that need one.

pub mod auth;
pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod train;
pub mod train_type;
pub mod user;
