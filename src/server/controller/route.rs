//! Route endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        route::{RouteDto, RoutePatch, RouteReadDto, RouteRequest},
    },
    server::{
        controller::util::trace_projection,
        error::Error,
        model::app::AppState,
        projection::{Action, Resource},
        service::route::RouteService,
    },
};

/// OpenAPI tag for the route endpoints
pub static ROUTE_TAG: &str = "route";

/// List all routes with their stations by name
#[utoipa::path(
    get,
    path = "/api/routes",
    tag = ROUTE_TAG,
    responses(
        (status = 200, description = "Success when listing routes", body = Vec<RouteReadDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_routes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    trace_projection::<RouteReadDto>(Resource::Route, Action::List)?;

    let routes = RouteService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(routes)))
}

/// Retrieve a route
#[utoipa::path(
    get,
    path = "/api/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Success when retrieving a route", body = RouteReadDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<RouteReadDto>(Resource::Route, Action::Retrieve)?;

    let route = RouteService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(route)))
}

/// Create a route between two existing stations
///
/// # Responses
/// - 201 (Created): The route with station IDs
/// - 400 (Bad Request): Source or destination does not exist
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/routes",
    tag = ROUTE_TAG,
    request_body = RouteRequest,
    responses(
        (status = 201, description = "Route created", body = RouteDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<RouteRequest>(Resource::Route, Action::Create)?;

    let route = RouteService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(route)))
}

/// Replace every field of a route
#[utoipa::path(
    put,
    path = "/api/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route ID")),
    request_body = RouteRequest,
    responses(
        (status = 200, description = "Route updated", body = RouteDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<RouteRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<RouteRequest>(Resource::Route, Action::Update)?;

    let route = RouteService::new(&state.db)
        .update(id, request.into())
        .await?;

    Ok((StatusCode::OK, Json(route)))
}

/// Update the provided fields of a route
#[utoipa::path(
    patch,
    path = "/api/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route ID")),
    request_body = RoutePatch,
    responses(
        (status = 200, description = "Route updated", body = RouteDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_route(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<RoutePatch>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<RoutePatch>(Resource::Route, Action::PartialUpdate)?;

    let route = RouteService::new(&state.db).update(id, patch).await?;

    Ok((StatusCode::OK, Json(route)))
}

/// Delete a route that no journey runs on
#[utoipa::path(
    delete,
    path = "/api/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route ID")),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 409, description = "Route is referenced by a journey", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<()>(Resource::Route, Action::Delete)?;

    RouteService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
