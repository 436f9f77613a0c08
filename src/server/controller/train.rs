//! Train endpoints with the train type filter.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        train::{TrainDto, TrainListQuery, TrainPatch, TrainReadDto, TrainRequest},
    },
    server::{
        controller::util::trace_projection,
        error::Error,
        model::app::AppState,
        projection::{Action, Resource},
        service::train::TrainService,
    },
};

/// OpenAPI tag for the train endpoints
pub static TRAIN_TAG: &str = "train";

/// List trains, optionally filtered by train type
///
/// `?train_type=1,3` keeps trains of either type. Every ID must name an existing train type.
///
/// # Responses
/// - 200 (Success): Trains with their type by name
/// - 400 (Bad Request): Malformed ID list, or an ID naming no train type
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/trains",
    tag = TRAIN_TAG,
    params(TrainListQuery),
    responses(
        (status = 200, description = "Success when listing trains", body = Vec<TrainReadDto>),
        (status = 400, description = "Malformed or unknown train type filter", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trains(
    State(state): State<AppState>,
    Query(query): Query<TrainListQuery>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainReadDto>(Resource::Train, Action::List)?;

    let trains = TrainService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(trains)))
}

/// Retrieve a train
#[utoipa::path(
    get,
    path = "/api/trains/{id}",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train ID")),
    responses(
        (status = 200, description = "Success when retrieving a train", body = TrainReadDto),
        (status = 404, description = "Train not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_train(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainReadDto>(Resource::Train, Action::Retrieve)?;

    let train = TrainService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(train)))
}

/// Create a train of an existing type with at least one cargo and seat
#[utoipa::path(
    post,
    path = "/api/trains",
    tag = TRAIN_TAG,
    request_body = TrainRequest,
    responses(
        (status = 201, description = "Train created", body = TrainDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 409, description = "Duplicate name", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_train(
    State(state): State<AppState>,
    Json(request): Json<TrainRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainRequest>(Resource::Train, Action::Create)?;

    let train = TrainService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(train)))
}

/// Replace every field of a train
#[utoipa::path(
    put,
    path = "/api/trains/{id}",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train ID")),
    request_body = TrainRequest,
    responses(
        (status = 200, description = "Train updated", body = TrainDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Train not found", body = ErrorDto),
        (status = 409, description = "Duplicate name, or capacity below booked seats", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_train(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<TrainRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainRequest>(Resource::Train, Action::Update)?;

    let train = TrainService::new(&state.db)
        .update(id, request.into())
        .await?;

    Ok((StatusCode::OK, Json(train)))
}

/// Update the provided fields of a train
#[utoipa::path(
    patch,
    path = "/api/trains/{id}",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train ID")),
    request_body = TrainPatch,
    responses(
        (status = 200, description = "Train updated", body = TrainDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Train not found", body = ErrorDto),
        (status = 409, description = "Duplicate name, or capacity below booked seats", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_train(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<TrainPatch>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainPatch>(Resource::Train, Action::PartialUpdate)?;

    let train = TrainService::new(&state.db).update(id, patch).await?;

    Ok((StatusCode::OK, Json(train)))
}

/// Delete a train that no journey uses
#[utoipa::path(
    delete,
    path = "/api/trains/{id}",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train ID")),
    responses(
        (status = 204, description = "Train deleted"),
        (status = 404, description = "Train not found", body = ErrorDto),
        (status = 409, description = "Train is referenced by a journey", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_train(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<()>(Resource::Train, Action::Delete)?;

    TrainService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
