//! Field-level validation errors, reported as 400.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::FieldErrorDto;

/// Key used for errors that are not attributable to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Input rejected before anything is written.
///
/// Every variant is reported against exactly one field (see [`ValidationError::field`]) so
/// clients receive a field-keyed payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Seat number outside `1..=places_in_cargo`.
    #[error("seat must be in range [1, {places_in_cargo}], not {seat}")]
    SeatOutOfRange {
        /// Requested seat
        seat: i32,
        /// Seats per cargo of the train
        places_in_cargo: i32,
    },
    /// Cargo number outside `1..=cargo_num`.
    #[error("cargo must be in range [1, {cargo_num}], not {cargo}")]
    CargoOutOfRange {
        /// Requested cargo
        cargo: i32,
        /// Number of cargos of the train
        cargo_num: i32,
    },
    /// An order was submitted without tickets.
    #[error("order must contain at least one ticket")]
    EmptyOrder,
    /// A comma-separated id list could not be parsed.
    #[error("expected a comma-separated list of ids, got {value:?}")]
    MalformedIdList {
        /// Query parameter or body field holding the list
        field: &'static str,
        /// Raw value received
        value: String,
    },
    /// A referenced record does not exist.
    #[error("invalid pk \"{id}\" - object does not exist")]
    UnknownReference {
        /// Field holding the reference
        field: &'static str,
        /// Referenced ID
        id: i32,
    },
    /// A field value violates a simple constraint.
    #[error("{message}")]
    InvalidField {
        /// Offending field
        field: &'static str,
        /// Human readable reason
        message: String,
    },
}

impl ValidationError {
    /// Name of the field the error is reported against.
    pub fn field(&self) -> &'static str {
        match self {
            Self::SeatOutOfRange { .. } => "seat",
            Self::CargoOutOfRange { .. } => "cargo",
            Self::EmptyOrder => NON_FIELD_ERRORS,
            Self::MalformedIdList { field, .. }
            | Self::UnknownReference { field, .. }
            | Self::InvalidField { field, .. } => field,
        }
    }

    /// Shorthand for [`ValidationError::InvalidField`].
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(field = self.field(), "Validation failed: {}", self);

        let mut fields = BTreeMap::new();
        fields.insert(self.field().to_string(), self.to_string());

        (
            StatusCode::BAD_REQUEST,
            Json(FieldErrorDto {
                error: "Validation failed".to_string(),
                fields,
            }),
        )
            .into_response()
    }
}
