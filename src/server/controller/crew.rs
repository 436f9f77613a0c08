//! Crew endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        crew::{CrewDto, CrewPatch, CrewReadDto, CrewRequest},
    },
    server::{
        controller::util::trace_projection,
        error::Error,
        model::app::AppState,
        projection::{Action, Resource},
        service::crew::CrewService,
    },
};

/// OpenAPI tag for the crew member endpoints
pub static CREW_TAG: &str = "crew";

/// List all crew members by full name
#[utoipa::path(
    get,
    path = "/api/crews",
    tag = CREW_TAG,
    responses(
        (status = 200, description = "Success when listing crews", body = Vec<CrewReadDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_crews(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    trace_projection::<CrewReadDto>(Resource::Crew, Action::List)?;

    let crews = CrewService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(crews)))
}

/// Retrieve a crew member
#[utoipa::path(
    get,
    path = "/api/crews/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    responses(
        (status = 200, description = "Success when retrieving a crew member", body = CrewReadDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_crew(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<CrewReadDto>(Resource::Crew, Action::Retrieve)?;

    let crew = CrewService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(crew)))
}

/// Create a crew member
#[utoipa::path(
    post,
    path = "/api/crews",
    tag = CREW_TAG,
    request_body = CrewRequest,
    responses(
        (status = 201, description = "Crew member created", body = CrewDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_crew(
    State(state): State<AppState>,
    Json(request): Json<CrewRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<CrewRequest>(Resource::Crew, Action::Create)?;

    let crew = CrewService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(crew)))
}

/// Replace every field of a crew member
#[utoipa::path(
    put,
    path = "/api/crews/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    request_body = CrewRequest,
    responses(
        (status = 200, description = "Crew member updated", body = CrewDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_crew(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CrewRequest>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<CrewRequest>(Resource::Crew, Action::Update)?;

    let crew = CrewService::new(&state.db)
        .update(id, request.into())
        .await?;

    Ok((StatusCode::OK, Json(crew)))
}

/// Update the provided fields of a crew member
#[utoipa::path(
    patch,
    path = "/api/crews/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    request_body = CrewPatch,
    responses(
        (status = 200, description = "Crew member updated", body = CrewDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_crew(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<CrewPatch>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<CrewPatch>(Resource::Crew, Action::PartialUpdate)?;

    let crew = CrewService::new(&state.db).update(id, patch).await?;

    Ok((StatusCode::OK, Json(crew)))
}

/// Delete a crew member
///
/// Journeys the crew member was assigned to keep running without them.
#[utoipa::path(
    delete,
    path = "/api/crews/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    responses(
        (status = 204, description = "Crew member deleted"),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_crew(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<()>(Resource::Crew, Action::Delete)?;

    CrewService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
