//! Train ticket booking backend.
//!
//! Exposes CRUD endpoints over stations, routes, train types, trains, crews and journeys,
//! plus authenticated ordering of tickets for specific seats on a journey.

pub mod model;
pub mod server;
