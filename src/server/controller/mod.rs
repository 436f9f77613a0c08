//! HTTP controller endpoints for the railway API.
//!
//! Handlers translate requests into service calls and map the results onto status codes:
//! creates answer 201, deletes 204, everything else 200. Errors convert through
//! [`Error`](crate::server::error::Error). Every handler is annotated for utoipa so the
//! OpenAPI document stays in sync with the routes.

pub mod auth;
pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod train;
pub mod train_type;
pub mod util;
