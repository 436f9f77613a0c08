//! Utility functions for controller request handling.
//!
//! Resolves the caller's identity from the session and checks which projection a handler
//! serves.

pub mod get_user;

use crate::server::{
    error::Error,
    projection::{Action, Projected, Projection, Resource},
};

/// Checks that `T` is the representation assigned to `(resource, action)` and logs it.
///
/// # Returns
/// - `Ok(())` - `T` renders the projection [`Projection::for_action`] selects
/// - `Err(Error::InternalError)` - The handler serves a different representation
pub fn trace_projection<T: Projected>(resource: Resource, action: Action) -> Result<(), Error> {
    let projection = Projection::for_action(resource, action);

    if projection != T::PROJECTION {
        return Err(Error::InternalError(format!(
            "{:?} {:?} expects {:?} but the handler serves {:?}",
            resource,
            action,
            projection,
            T::PROJECTION
        )));
    }

    match projection {
        Some(projection) => tracing::debug!(?resource, ?action, ?projection, "Handling request"),
        None => tracing::debug!(?resource, ?action, "Handling request without body"),
    }

    Ok(())
}
