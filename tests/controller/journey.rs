//! Tests for the journey endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use railway::{
    model::journey::JourneyRequest,
    server::controller::journey::{create_journey, delete_journey, get_journey, list_journeys},
};
use serde_json::json;

use super::*;

/// Expect taken seats grouped by cargo with seats ascending
#[tokio::test]
async fn detail_groups_taken_seats() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let user = test.user().insert_user(TEST_EMAIL).await?;
    let booked = test.booking().insert_booked_journey(2, 10).await?;
    let order = test.booking().insert_order(user.id).await?;
    for (cargo, seat) in [(1, 3), (1, 1), (2, 5)] {
        test.booking()
            .insert_ticket(order.id, booked.journey.id, cargo, seat)
            .await?;
    }

    let resp = get_journey(State(test.to_app_state()), Path(booked.journey.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(
        body["taken_seats"],
        json!([{"cargo": 1, "seat": "1, 3"}, {"cargo": 2, "seat": "5"}])
    );
    assert_eq!(body["departure_time"], "2025-11-01 08:00");

    Ok(())
}

/// Expect the listing to count sold tickets
#[tokio::test]
async fn list_counts_tickets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let user = test.user().insert_user(TEST_EMAIL).await?;
    let booked = test.booking().insert_booked_journey(1, 10).await?;
    let order = test.booking().insert_order(user.id).await?;
    test.booking()
        .insert_ticket(order.id, booked.journey.id, 1, 1)
        .await?;
    test.booking()
        .insert_ticket(order.id, booked.journey.id, 1, 2)
        .await?;

    let resp = list_journeys(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    let body = json_body(resp).await;
    assert_eq!(body[0]["tickets_taken"], 2);
    assert_eq!(
        body[0]["route"],
        format!(
            "{} -> {} (120.0 km)",
            booked.source.name, booked.destination.name
        )
    );

    Ok(())
}

/// Expect 201 with crew IDs, and 400 when arrival precedes departure
#[tokio::test]
async fn create_validates_times() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booked = test.booking().insert_booked_journey(1, 10).await?;
    let crew = test.booking().insert_crew("Olena", "Shevchenko").await?;

    let request = |departure, arrival| {
        Json(JourneyRequest {
            route: booked.route.id,
            train: booked.train.id,
            crews: vec![crew.id],
            departure_time: departure,
            arrival_time: arrival,
        })
    };

    let resp = create_journey(
        State(test.to_app_state()),
        request(mock_timestamp(9, 0), mock_timestamp(12, 0)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(json_body(resp).await["crews"], json!([crew.id]));

    let resp = create_journey(
        State(test.to_app_state()),
        request(mock_timestamp(12, 0), mock_timestamp(9, 0)),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["fields"]["arrival_time"].is_string());

    Ok(())
}

/// Expect 204 and the journey to be gone afterwards
#[tokio::test]
async fn delete_removes_journey() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booked = test.booking().insert_booked_journey(1, 10).await?;

    let resp = delete_journey(State(test.to_app_state()), Path(booked.journey.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_journey(State(test.to_app_state()), Path(booked.journey.id))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
