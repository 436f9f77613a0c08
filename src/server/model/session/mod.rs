//! Session data models and utilities.
//!
//! Type-safe wrappers around values kept in the tower-sessions store (Valkey-backed in
//! production, in-memory in tests).

pub mod user;
