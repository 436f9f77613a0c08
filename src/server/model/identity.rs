//! Caller identity resolved from the session.

use crate::{
    model::user::UserDto,
    server::error::{auth::AuthError, Error},
};

/// Caller of a service operation, resolved from the session by the controller layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    /// No user is logged in.
    Anonymous,
    /// An authenticated user.
    User(UserDto),
}

impl Identity {
    /// Returns the authenticated user, or [`AuthError::UserNotInSession`] for anonymous callers.
    pub fn require(&self) -> Result<&UserDto, Error> {
        match self {
            Self::User(user) => Ok(user),
            Self::Anonymous => Err(AuthError::UserNotInSession.into()),
        }
    }
}
