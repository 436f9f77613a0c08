//! Request and response types shared by the HTTP API.
//!
//! Read types (`*ListDto`, `*DetailDto`, `*ReadDto`) are display-oriented: related records are
//! rendered by name and timestamps are preformatted. Write types (`*Request`, `*Patch`) and
//! their echoes (`*Dto`) carry foreign-key ids and raw values.

pub mod api;
pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod train;
pub mod user;
