//! Error types for the railway server.
//!
//! Domain errors (authentication, validation, conflicts, configuration) live in their own
//! modules and are aggregated into [`Error`], which every service and controller returns. Each
//! domain error implements `IntoResponse` so the HTTP mapping stays next to the error itself.

pub mod auth;
pub mod config;
pub mod conflict;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, conflict::ConflictError,
        validation::ValidationError,
    },
};

/// Main error type for the railway server.
///
/// Storage errors that stem from constraint violations are translated into [`ConflictError`]
/// when converted from [`DbErr`]; every other storage failure stays a [`Error::DbErr`] and is
/// reported as a 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing session, bad credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Input rejected before any write.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Write collided with existing data.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Requested record does not exist, or is not visible to the caller.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource name
        resource: &'static str,
        /// Requested ID
        id: i32,
    },
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing or verification failed.
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// I/O error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::NotFound`].
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Self::ConflictError(ConflictError::UniqueConstraint)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                Self::ConflictError(ConflictError::ForeignKeyConstraint)
            }
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, with a field-keyed payload
/// - 401 Unauthorized - Missing or invalid credentials
/// - 404 Not Found - Missing records
/// - 409 Conflict - Uniqueness or referential collisions
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            Self::NotFound { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full message is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_not_found_to_404() {
        let resp = Error::not_found("station", 7).into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn maps_conflict_to_409() {
        let resp = Error::from(ConflictError::InUse {
            resource: "station",
            id: 1,
        })
        .into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn maps_unclassified_db_error_to_500() {
        let err = Error::from(DbErr::Custom("boom".to_string()));

        assert!(matches!(err, Error::DbErr(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
