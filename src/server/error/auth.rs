//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while authenticating the caller.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    #[error("Authentication credentials were not provided")]
    UserNotInSession,
    /// The session names a user that no longer exists.
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    /// Email unknown or password mismatch.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthorized("Authentication credentials were not provided")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::unauthorized("Authentication credentials were not provided")
            }
            Self::InvalidCredentials => Self::unauthorized("Invalid email or password"),
        }
    }
}
