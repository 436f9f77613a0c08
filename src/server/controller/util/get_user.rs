//! Session user lookup.

use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, identity::Identity, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Resolves the caller as an [`Identity`], treating a missing session user as anonymous
///
/// A session naming a user that no longer exists is cleared and also resolves to
/// [`Identity::Anonymous`].
pub async fn identity_from_session(state: &AppState, session: &Session) -> Result<Identity, Error> {
    match get_user_from_session(state, session).await {
        Ok(user) => Ok(Identity::User(user)),
        Err(Error::AuthError(AuthError::UserNotInSession | AuthError::UserNotInDatabase(_))) => {
            Ok(Identity::Anonymous)
        }
        Err(err) => Err(err),
    }
}
