//! Utility functions and helpers for server operations.
//!
//! Pure helpers shared by repositories and services: the seat/cargo capacity rule, query
//! filter parsing and timestamp formatting.

pub mod capacity;
pub mod filter;
pub mod time;
