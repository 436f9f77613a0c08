//! Train type endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        train::{TrainTypeDto, TrainTypePatch, TrainTypeRequest},
    },
    server::{
        controller::util::trace_projection,
        error::Error,
        model::app::AppState,
        projection::{Action, Resource},
        service::train_type::TrainTypeService,
    },
};

/// OpenAPI tag for the train type endpoints
pub static TRAIN_TYPE_TAG: &str = "train type";

/// List all train types
#[utoipa::path(
    get,
    path = "/api/train-types",
    tag = TRAIN_TYPE_TAG,
    responses(
        (status = 200, description = "Success when listing train types", body = Vec<TrainTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_train_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainTypeDto>(Resource::TrainType, Action::List)?;

    let train_types = TrainTypeService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(train_types)))
}

/// Retrieve a train type
#[utoipa::path(
    get,
    path = "/api/train-types/{id}",
    tag = TRAIN_TYPE_TAG,
    params(("id" = i32, Path, description = "Train type ID")),
    responses(
        (status = 200, description = "Success when retrieving a train type", body = TrainTypeDto),
        (status = 404, description = "Train type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_train_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainTypeDto>(Resource::TrainType, Action::Retrieve)?;

    let train_type = TrainTypeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(train_type)))
}

/// Create a train type
#[utoipa::path(
    post,
    path = "/api/train-types",
    tag = TRAIN_TYPE_TAG,
    request_body = TrainTypeRequest,
    responses(
        (status = 201, description = "Train type created", body = TrainTypeDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 409, description = "Duplicate name", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_train_type(
    State(state): State<AppState>,
    Json(request): Json<TrainTypeRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainTypeRequest>(Resource::TrainType, Action::Create)?;

    let train_type = TrainTypeService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(train_type)))
}

/// Rename a train type
#[utoipa::path(
    put,
    path = "/api/train-types/{id}",
    tag = TRAIN_TYPE_TAG,
    params(("id" = i32, Path, description = "Train type ID")),
    request_body = TrainTypeRequest,
    responses(
        (status = 200, description = "Train type updated", body = TrainTypeDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Train type not found", body = ErrorDto),
        (status = 409, description = "Duplicate name", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_train_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<TrainTypeRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainTypeRequest>(Resource::TrainType, Action::Update)?;

    let train_type = TrainTypeService::new(&state.db)
        .update(id, request.into())
        .await?;

    Ok((StatusCode::OK, Json(train_type)))
}

/// Update the provided fields of a train type
#[utoipa::path(
    patch,
    path = "/api/train-types/{id}",
    tag = TRAIN_TYPE_TAG,
    params(("id" = i32, Path, description = "Train type ID")),
    request_body = TrainTypePatch,
    responses(
        (status = 200, description = "Train type updated", body = TrainTypeDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Train type not found", body = ErrorDto),
        (status = 409, description = "Duplicate name", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_train_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<TrainTypePatch>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<TrainTypePatch>(Resource::TrainType, Action::PartialUpdate)?;

    let train_type = TrainTypeService::new(&state.db).update(id, patch).await?;

    Ok((StatusCode::OK, Json(train_type)))
}

/// Delete a train type that no train uses
#[utoipa::path(
    delete,
    path = "/api/train-types/{id}",
    tag = TRAIN_TYPE_TAG,
    params(("id" = i32, Path, description = "Train type ID")),
    responses(
        (status = 204, description = "Train type deleted"),
        (status = 404, description = "Train type not found", body = ErrorDto),
        (status = 409, description = "Train type is referenced by a train", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_train_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<()>(Resource::TrainType, Action::Delete)?;

    TrainTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
