//! Registration, login and logout endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        user::{CredentialsDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

/// OpenAPI tag for the account endpoints
pub static AUTH_TAG: &str = "auth";

/// Create an account and log in as the new user
///
/// # Responses
/// - 201 (Created): The new user; the session now holds their ID
/// - 400 (Bad Request): Blank or malformed email, or password shorter than 8 characters
/// - 409 (Conflict): Email already registered
/// - 500 (Internal Server Error): Database, hashing or session failure
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "User registered and logged in", body = UserDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 409, description = "Email already registered", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, state.password_hash_cost)
        .register(credentials)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
///
/// # Responses
/// - 200 (Success): The user; the session now holds their ID
/// - 401 (Unauthorized): Unknown email or wrong password
/// - 500 (Internal Server Error): Database, hashing or session failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, state.password_hash_cost)
        .login(credentials)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 204 (No Content): Session cleared, or there was nothing to clear
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored fails in the store
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Retrieve the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving the current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
