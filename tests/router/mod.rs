//! End-to-end tests through the full router, session layer included.

mod booking;
mod docs;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use railway::server::{model::app::AppState, router::routes};
use railway_test_utils::prelude::*;
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::json_body;

/// Router with an in-memory session store over the test database.
pub fn app(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();

    routes()
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
}

/// Send a JSON request, attaching `cookie` when given.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// The `name=value` part of the session cookie set by a response.
pub fn session_cookie(resp: &Response<Body>) -> String {
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}
