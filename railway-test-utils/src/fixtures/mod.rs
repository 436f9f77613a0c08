//! Fixtures inserting records into the test database.
//!
//! - `booking` - Stations, routes, trains, crews, journeys, orders and tickets
//! - `user` - User accounts with a known password

pub mod booking;
pub mod user;
