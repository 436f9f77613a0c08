use axum::http::StatusCode;

use super::*;

/// Expect the OpenAPI document to list the booking paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, "GET", "/api/docs/openapi.json", None, None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    for path in [
        "/api/stations/{id}",
        "/api/trains",
        "/api/journeys/{id}",
        "/api/order",
        "/api/auth/login",
    ] {
        assert!(body["paths"][path].is_object(), "missing {}", path);
    }

    Ok(())
}
