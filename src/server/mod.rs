//! Server application core modules.
//!
//! This module contains the HTTP routing, session authentication, database access and
//! booking logic of the application. Controllers translate HTTP requests into service calls,
//! services hold the business rules (seat validation, atomic order creation), and repositories
//! wrap SeaORM queries.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod projection;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
