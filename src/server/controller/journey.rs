//! Journey endpoints, including taken seats on retrieval.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        journey::{JourneyDetailDto, JourneyDto, JourneyListDto, JourneyPatch, JourneyRequest},
    },
    server::{
        controller::util::trace_projection,
        error::Error,
        model::app::AppState,
        projection::{Action, Resource},
        service::journey::JourneyService,
    },
};

/// OpenAPI tag for the journey endpoints
pub static JOURNEY_TAG: &str = "journey";

/// List all journeys with the number of tickets sold
#[utoipa::path(
    get,
    path = "/api/journeys",
    tag = JOURNEY_TAG,
    responses(
        (status = 200, description = "Success when listing journeys", body = Vec<JourneyListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_journeys(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    trace_projection::<JourneyListDto>(Resource::Journey, Action::List)?;

    let journeys = JourneyService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(journeys)))
}

/// Retrieve a journey with its crew and taken seats
///
/// # Responses
/// - 200 (Success): The journey, taken seats grouped by cargo
/// - 404 (Not Found): No journey with this ID
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/journeys/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey ID")),
    responses(
        (status = 200, description = "Success when retrieving a journey", body = JourneyDetailDto),
        (status = 404, description = "Journey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_journey(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<JourneyDetailDto>(Resource::Journey, Action::Retrieve)?;

    let journey = JourneyService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(journey)))
}

/// Schedule a journey and assign its crew
///
/// # Responses
/// - 201 (Created): The journey with route, train and crew IDs
/// - 400 (Bad Request): Unknown route, train or crew, or arrival before departure
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/journeys",
    tag = JOURNEY_TAG,
    request_body = JourneyRequest,
    responses(
        (status = 201, description = "Journey created", body = JourneyDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_journey(
    State(state): State<AppState>,
    Json(request): Json<JourneyRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<JourneyRequest>(Resource::Journey, Action::Create)?;

    let journey = JourneyService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(journey)))
}

/// Replace every field of a journey, including its crew
#[utoipa::path(
    put,
    path = "/api/journeys/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey ID")),
    request_body = JourneyRequest,
    responses(
        (status = 200, description = "Journey updated", body = JourneyDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Journey not found", body = ErrorDto),
        (status = 409, description = "New train cannot hold booked seats", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_journey(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<JourneyRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<JourneyRequest>(Resource::Journey, Action::Update)?;

    let journey = JourneyService::new(&state.db)
        .update(id, request.into())
        .await?;

    Ok((StatusCode::OK, Json(journey)))
}

/// Update the provided fields of a journey
///
/// The crew assignment is only replaced when `crews` is present.
#[utoipa::path(
    patch,
    path = "/api/journeys/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey ID")),
    request_body = JourneyPatch,
    responses(
        (status = 200, description = "Journey updated", body = JourneyDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Journey not found", body = ErrorDto),
        (status = 409, description = "New train cannot hold booked seats", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_journey(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<JourneyPatch>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<JourneyPatch>(Resource::Journey, Action::PartialUpdate)?;

    let journey = JourneyService::new(&state.db).update(id, patch).await?;

    Ok((StatusCode::OK, Json(journey)))
}

/// Delete a journey together with its tickets
#[utoipa::path(
    delete,
    path = "/api/journeys/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey ID")),
    responses(
        (status = 204, description = "Journey deleted"),
        (status = 404, description = "Journey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_journey(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<()>(Resource::Journey, Action::Delete)?;

    JourneyService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
