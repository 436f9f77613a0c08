//! Full booking flow: catalog setup, registration and ordering over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use super::*;

/// Expect a registered user to book seats and see them taken on the journey
#[tokio::test]
async fn register_then_book_seats() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let app = app(&test);

    let kyiv = json_body(
        send(
            &app,
            "POST",
            "/api/stations",
            Some(json!({"name": "Kyiv", "latitude": 50.45, "longitude": 30.52})),
            None,
        )
        .await,
    )
    .await;
    let lviv = json_body(
        send(
            &app,
            "POST",
            "/api/stations",
            Some(json!({"name": "Lviv", "latitude": 49.84, "longitude": 24.03})),
            None,
        )
        .await,
    )
    .await;
    let route = json_body(
        send(
            &app,
            "POST",
            "/api/routes",
            Some(json!({"source": kyiv["id"], "destination": lviv["id"], "distance": 540.0})),
            None,
        )
        .await,
    )
    .await;
    let train_type = json_body(
        send(&app, "POST", "/api/train-types", Some(json!({"name": "Intercity"})), None).await,
    )
    .await;
    let train = json_body(
        send(
            &app,
            "POST",
            "/api/trains",
            Some(json!({
                "name": "IC 743",
                "cargo_num": 2,
                "places_in_cargo": 10,
                "train_type": train_type["id"],
            })),
            None,
        )
        .await,
    )
    .await;
    let resp = send(
        &app,
        "POST",
        "/api/journeys",
        Some(json!({
            "route": route["id"],
            "train": train["id"],
            "departure_time": "2025-11-01T08:00:00",
            "arrival_time": "2025-11-01T14:30:00",
        })),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let journey = json_body(resp).await;

    // Anonymous orders are rejected
    let order = json!({"tickets": [
        {"cargo": 1, "seat": 3, "journey": journey["id"]},
        {"cargo": 1, "seat": 1, "journey": journey["id"]},
        {"cargo": 2, "seat": 5, "journey": journey["id"]},
    ]});
    let resp = send(&app, "POST", "/api/order", Some(order.clone()), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = send(
        &app,
        "POST",
        "/api/auth/register",
        Some(json!({"email": TEST_EMAIL, "password": TEST_PASSWORD})),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let cookie = session_cookie(&resp);

    let resp = send(&app, "POST", "/api/order", Some(order.clone()), Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Booking the same seats again conflicts
    let resp = send(&app, "POST", "/api/order", Some(order), Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = send(
        &app,
        "GET",
        &format!("/api/journeys/{}", journey["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(
        json_body(resp).await["taken_seats"],
        json!([{"cargo": 1, "seat": "1, 3"}, {"cargo": 2, "seat": "5"}])
    );

    let resp = send(&app, "GET", "/api/order", None, Some(&cookie)).await;
    let orders = json_body(resp).await;
    assert_eq!(orders.as_array().map(Vec::len), Some(1));
    assert_eq!(orders[0]["tickets"][0]["journey"], "Kyiv -> Lviv (IC 743)");

    Ok(())
}

/// Expect a malformed train type filter to be rejected on its field
#[tokio::test]
async fn rejects_malformed_train_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, "GET", "/api/trains?train_type=1,,x", None, None).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["fields"]["train_type"].is_string());

    Ok(())
}

/// Expect a train not to shrink below a seat that is already booked
#[tokio::test]
async fn keeps_capacity_of_booked_train() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let rider = test.user().insert_user(TEST_EMAIL).await?;
    let booked = test.booking().insert_booked_journey(2, 10).await?;
    let order = test.booking().insert_order(rider.id).await?;
    test.booking()
        .insert_ticket(order.id, booked.journey.id, 2, 10)
        .await?;
    let app = app(&test);

    let uri = format!("/api/trains/{}", booked.train.id);
    let resp = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({"cargo_num": 1, "places_in_cargo": 5})),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let train = json_body(send(&app, "GET", &uri, None, None).await).await;
    assert_eq!(train["cargo_num"], 2);
    assert_eq!(train["places_in_cargo"], 10);

    let resp = send(
        &app,
        "GET",
        &format!("/api/journeys/{}", booked.journey.id),
        None,
        None,
    )
    .await;
    assert_eq!(
        json_body(resp).await["taken_seats"],
        json!([{"cargo": 2, "seat": "10"}])
    );

    Ok(())
}
