//! Tests for the authentication endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use railway::{
    model::user::CredentialsDto,
    server::{
        controller::auth::{get_user, login, logout, register},
        model::session::user::SessionUserId,
    },
};

use super::*;

fn credentials(email: &str, password: &str) -> Json<CredentialsDto> {
    Json(CredentialsDto {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Expect 201 and the new user stored in the session
#[tokio::test]
async fn register_logs_user_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let resp = register(
        State(test.to_app_state()),
        test.session.clone(),
        credentials(TEST_EMAIL, TEST_PASSWORD),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(
        SessionUserId::get(&test.session).await.unwrap(),
        body["id"].as_i64().map(|id| id as i32)
    );

    Ok(())
}

/// Expect 400 on the password field for a short password
#[tokio::test]
async fn register_rejects_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let resp = register(
        State(test.to_app_state()),
        test.session.clone(),
        credentials(TEST_EMAIL, "1234567"),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["fields"]["password"].is_string());
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

/// Expect 200 and the user ID stored in the session
#[tokio::test]
async fn login_stores_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let user = test.user().insert_user(TEST_EMAIL).await?;

    let resp = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials(TEST_EMAIL, TEST_PASSWORD),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(user.id));

    Ok(())
}

/// Expect 401 for a wrong password
#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_user(TEST_EMAIL)
        .build()
        .await?;

    let resp = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials(TEST_EMAIL, "wrong password"),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 204 whether or not a user was logged in
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let user = test.user().insert_user(TEST_EMAIL).await?;

    let resp = logout(test.session.clone()).await.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let resp = logout(test.session.clone()).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

/// Expect 401 for an anonymous session, 200 with the user otherwise
#[tokio::test]
async fn get_user_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let user = test.user().insert_user(TEST_EMAIL).await?;

    let resp = get_user(State(test.to_app_state()), test.session.clone())
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let resp = get_user(State(test.to_app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["email"], TEST_EMAIL);

    Ok(())
}
