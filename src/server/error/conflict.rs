//! Conflicts with stored data, reported as 409.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::FieldErrorDto,
    server::error::{validation::NON_FIELD_ERRORS, Error as AppError},
};

/// A write collided with existing data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    /// The `(cargo, seat, journey)` combination is already booked.
    #[error(
        "The fields cargo, seat, journey must make a unique set: seat {seat} in cargo {cargo} is already taken for journey {journey}"
    )]
    SeatTaken {
        /// Cargo number
        cargo: i32,
        /// Seat number
        seat: i32,
        /// Journey ID
        journey: i32,
    },
    /// A unique field value is already used by another record.
    #[error("{resource} with this {field} already exists")]
    Duplicate {
        /// Resource name
        resource: &'static str,
        /// Unique field
        field: &'static str,
    },
    /// The record is still referenced and its relation restricts deletion.
    #[error("{resource} {id} is referenced by other records and cannot be deleted")]
    InUse {
        /// Resource name
        resource: &'static str,
        /// Record ID
        id: i32,
    },
    /// A capacity change would leave booked tickets on seats that no longer exist.
    #[error(
        "{resource} {id} has tickets booked up to cargo {cargo} and seat {seat}; capacity cannot be reduced below them"
    )]
    BookedBeyondCapacity {
        /// Resource name
        resource: &'static str,
        /// Record ID
        id: i32,
        /// Highest booked cargo
        cargo: i32,
        /// Highest booked seat
        seat: i32,
    },
    /// A unique constraint was violated at the storage layer.
    #[error("A record with the same unique values already exists")]
    UniqueConstraint,
    /// A foreign key constraint was violated at the storage layer.
    #[error("The record references, or is referenced by, records that prevent this change")]
    ForeignKeyConstraint,
}

impl ConflictError {
    /// Reports `err` as `self` if it is a unique constraint violation, otherwise converts it as
    /// usual.
    pub fn on_unique_violation(self, err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::ConflictError(self),
            _ => AppError::from(err),
        }
    }

    fn field(&self) -> &'static str {
        match self {
            Self::Duplicate { field, .. } => field,
            _ => NON_FIELD_ERRORS,
        }
    }
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("Conflict: {}", self);

        let mut fields = BTreeMap::new();
        fields.insert(self.field().to_string(), self.to_string());

        (
            StatusCode::CONFLICT,
            Json(FieldErrorDto {
                error: "Conflict".to_string(),
                fields,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_non_unique_db_errors() {
        let err = ConflictError::SeatTaken {
            cargo: 1,
            seat: 1,
            journey: 1,
        }
        .on_unique_violation(DbErr::Custom("boom".to_string()));

        assert!(matches!(err, AppError::DbErr(_)));
    }

    #[test]
    fn reports_duplicate_under_its_field() {
        let err = ConflictError::Duplicate {
            resource: "station",
            field: "name",
        };

        assert_eq!(err.field(), "name");
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }
}
