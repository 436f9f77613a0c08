//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model type aliases, the caller identity
//! passed into services, and typed session data.

pub mod app;
pub mod db;
pub mod identity;
pub mod session;
