use axum::{body::Body, http::Response};
use serde_json::Value;

/// Read a response body as JSON.
pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
