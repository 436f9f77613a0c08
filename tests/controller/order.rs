//! Tests for the order endpoints.
//!
//! Covers the booking rules as seen over HTTP: authentication, seat and cargo bounds,
//! seat conflicts and the scoping of orders to their owner.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use railway::{
    model::order::{CreateOrderDto, TicketRequest},
    server::{
        controller::order::{create_order, delete_order, get_order, list_orders},
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use tower_sessions::{MemoryStore, Session};

use super::*;

fn order_of(tickets: &[(i32, i32, i32)]) -> Json<CreateOrderDto> {
    Json(CreateOrderDto {
        tickets: tickets
            .iter()
            .map(|&(cargo, seat, journey)| TicketRequest {
                cargo,
                seat,
                journey,
            })
            .collect(),
    })
}

fn status(result: Result<impl IntoResponse, Error>) -> StatusCode {
    match result {
        Ok(resp) => resp.into_response().status(),
        Err(err) => err.into_response().status(),
    }
}

fn fresh_session() -> Session {
    Session::new(None, std::sync::Arc::new(MemoryStore::default()), None)
}

/// Expect 201 with one ticket per requested seat
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let user = test.user().insert_user(TEST_EMAIL).await?;
    let booked = test.booking().insert_booked_journey(2, 10).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let journey = booked.journey.id;
    let resp = create_order(
        State(test.to_app_state()),
        test.session.clone(),
        order_of(&[(1, 3, journey), (2, 1, journey)]),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["user"], user.id);
    assert_eq!(body["tickets"].as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 401 and no order row without a logged in user
#[tokio::test]
async fn anonymous_create_returns_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booked = test.booking().insert_booked_journey(2, 10).await?;

    let resp = create_order(
        State(test.to_app_state()),
        test.session.clone(),
        order_of(&[(1, 1, booked.journey.id)]),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(entity::prelude::Order::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 400 keyed by field for seat and cargo outside the train
#[tokio::test]
async fn out_of_range_returns_field_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let user = test.user().insert_user(TEST_EMAIL).await?;
    let booked = test.booking().insert_booked_journey(2, 10).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let journey = booked.journey.id;

    let resp = create_order(
        State(test.to_app_state()),
        test.session.clone(),
        order_of(&[(1, 11, journey)]),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await["fields"]["seat"],
        "seat must be in range [1, 10], not 11"
    );

    let resp = create_order(
        State(test.to_app_state()),
        test.session.clone(),
        order_of(&[(3, 1, journey)]),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await["fields"]["cargo"],
        "cargo must be in range [1, 2], not 3"
    );

    Ok(())
}

/// Expect 400 on non_field_errors for an order without tickets
#[tokio::test]
async fn empty_order_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_user(TEST_EMAIL)
        .build()
        .await?;
    let state: AppState = test.to_app_state();
    let user = railway::server::data::user::UserRepository::new(&test.db)
        .find_by_email(TEST_EMAIL)
        .await?
        .unwrap();
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let resp = create_order(State(state), test.session.clone(), order_of(&[]))
        .await
        .err()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["fields"]["non_field_errors"].is_string());

    Ok(())
}

/// Expect exactly one of two concurrent identical orders to be created
#[tokio::test]
async fn concurrent_orders_book_seat_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let user = test.user().insert_user(TEST_EMAIL).await?;
    let booked = test.booking().insert_booked_journey(2, 10).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let journey = booked.journey.id;

    let (first, second) = tokio::join!(
        create_order(
            State(test.to_app_state()),
            test.session.clone(),
            order_of(&[(1, 5, journey)]),
        ),
        create_order(
            State(test.to_app_state()),
            test.session.clone(),
            order_of(&[(1, 5, journey)]),
        ),
    );

    let mut statuses = vec![status(first), status(second)];
    statuses.sort();

    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
    assert_eq!(entity::prelude::Ticket::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect 404 when another user requests or deletes the order
#[tokio::test]
async fn other_users_order_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_user(TEST_EMAIL).await?;
    let other = test.user().insert_user("other@example.com").await?;
    let booked = test.booking().insert_booked_journey(1, 4).await?;
    let order = test.booking().insert_order(owner.id).await?;
    test.booking()
        .insert_ticket(order.id, booked.journey.id, 1, 1)
        .await?;

    let session = fresh_session();
    SessionUserId::insert(&session, other.id).await.unwrap();

    let resp = get_order(State(test.to_app_state()), session.clone(), Path(order.id))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = delete_order(State(test.to_app_state()), session.clone(), Path(order.id))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = list_orders(State(test.to_app_state()), session)
        .await
        .unwrap()
        .into_response();
    assert_eq!(json_body(resp).await, serde_json::json!([]));

    Ok(())
}

/// Expect the owner to see the labelled tickets of the order
#[tokio::test]
async fn owner_reads_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_user(TEST_EMAIL).await?;
    let booked = test.booking().insert_booked_journey(1, 4).await?;
    let order = test.booking().insert_order(owner.id).await?;
    test.booking()
        .insert_ticket(order.id, booked.journey.id, 1, 2)
        .await?;
    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let resp = get_order(State(test.to_app_state()), test.session.clone(), Path(order.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(
        body["tickets"][0]["journey"],
        format!(
            "{} -> {} ({})",
            booked.source.name, booked.destination.name, booked.train.name
        )
    );
    assert_eq!(body["tickets"][0]["arrival_time"], "2025-11-01 14:30");

    Ok(())
}
