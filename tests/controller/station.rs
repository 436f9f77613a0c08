//! Tests for the station endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use railway::{
    model::station::{StationPatch, StationRequest},
    server::{
        controller::station::{create_station, delete_station, get_station, patch_station},
        model::app::AppState,
    },
};

use super::*;

fn request(name: &str) -> StationRequest {
    StationRequest {
        name: name.to_string(),
        latitude: 50.45,
        longitude: 30.52,
    }
}

/// Expect 201 with the created station
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = create_station(State(state), Json(request("Kyiv")))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Kyiv");

    Ok(())
}

/// Expect 409 naming the field for a duplicate station name
#[tokio::test]
async fn create_duplicate_returns_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let state: AppState = test.to_app_state();
    test.booking().insert_station("Kyiv").await?;

    let result = create_station(State(state), Json(request("Kyiv"))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = json_body(resp).await;
    assert!(body["fields"]["name"].is_string());

    Ok(())
}

/// Expect 404 with the resource and ID in the message
#[tokio::test]
async fn get_missing_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = get_station(State(state), Path(9))
        .await
        .err()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "station 9 not found");

    Ok(())
}

/// Expect PATCH to leave omitted fields untouched
#[tokio::test]
async fn patch_updates_given_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let state: AppState = test.to_app_state();
    let station = test.booking().insert_station("Lviv").await?;

    let resp = patch_station(
        State(state),
        Path(station.id),
        Json(StationPatch {
            name: Some("Lviv Main".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Lviv Main");
    assert_eq!(body["latitude"], station.latitude);

    Ok(())
}

/// Expect 409 when a route still uses the station, 204 otherwise
#[tokio::test]
async fn delete_respects_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let booked = test.booking().insert_booked_journey(1, 1).await?;
    let unused = test.booking().insert_station("Unused").await?;

    let resp = delete_station(State(test.to_app_state()), Path(booked.source.id))
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = delete_station(State(test.to_app_state()), Path(unused.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
