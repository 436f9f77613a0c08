//! Station endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        station::{StationDetailDto, StationListDto, StationPatch, StationRequest},
    },
    server::{
        controller::util::trace_projection,
        error::Error,
        model::app::AppState,
        projection::{Action, Resource},
        service::station::StationService,
    },
};

/// OpenAPI tag for the station endpoints
pub static STATION_TAG: &str = "station";

/// List all stations
///
/// # Responses
/// - 200 (Success): Stations by ID and name
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/stations",
    tag = STATION_TAG,
    responses(
        (status = 200, description = "Success when listing stations", body = Vec<StationListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_stations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    trace_projection::<StationListDto>(Resource::Station, Action::List)?;

    let stations = StationService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(stations)))
}

/// Retrieve a station with its coordinates
///
/// # Responses
/// - 200 (Success): The station
/// - 404 (Not Found): No station with this ID
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Success when retrieving a station", body = StationDetailDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<StationDetailDto>(Resource::Station, Action::Retrieve)?;

    let station = StationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(station)))
}

/// Create a station
///
/// # Responses
/// - 201 (Created): The new station
/// - 400 (Bad Request): Blank name
/// - 409 (Conflict): A station with this name already exists
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/stations",
    tag = STATION_TAG,
    request_body = StationRequest,
    responses(
        (status = 201, description = "Station created", body = StationDetailDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 409, description = "Duplicate name", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_station(
    State(state): State<AppState>,
    Json(request): Json<StationRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<StationRequest>(Resource::Station, Action::Create)?;

    let station = StationService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(station)))
}

/// Replace every field of a station
#[utoipa::path(
    put,
    path = "/api/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station ID")),
    request_body = StationRequest,
    responses(
        (status = 200, description = "Station updated", body = StationDetailDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 409, description = "Duplicate name", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<StationRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<StationRequest>(Resource::Station, Action::Update)?;

    let station = StationService::new(&state.db)
        .update(id, request.into())
        .await?;

    Ok((StatusCode::OK, Json(station)))
}

/// Update the provided fields of a station
#[utoipa::path(
    patch,
    path = "/api/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station ID")),
    request_body = StationPatch,
    responses(
        (status = 200, description = "Station updated", body = StationDetailDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 409, description = "Duplicate name", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<StationPatch>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<StationPatch>(Resource::Station, Action::PartialUpdate)?;

    let station = StationService::new(&state.db).update(id, patch).await?;

    Ok((StatusCode::OK, Json(station)))
}

/// Delete a station that no route references
///
/// # Responses
/// - 204 (No Content): Station deleted
/// - 404 (Not Found): No station with this ID
/// - 409 (Conflict): A route still starts or ends at the station
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    delete,
    path = "/api/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station ID")),
    responses(
        (status = 204, description = "Station deleted"),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 409, description = "Station is referenced by a route", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<()>(Resource::Station, Action::Delete)?;

    StationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
