//! Order endpoints, scoped to the signed-in user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        order::{CreateOrderDto, OrderDto, OrderReadDto},
    },
    server::{
        controller::util::{get_user::identity_from_session, trace_projection},
        error::Error,
        model::app::AppState,
        projection::{Action, Resource},
        service::order::OrderService,
    },
};

/// OpenAPI tag for the order endpoints
pub static ORDER_TAG: &str = "order";

/// List the caller's orders, newest first
#[utoipa::path(
    get,
    path = "/api/order",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Success when listing orders", body = Vec<OrderReadDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<OrderReadDto>(Resource::Order, Action::List)?;

    let identity = identity_from_session(&state, &session).await?;
    let orders = OrderService::new(&state.db).list(&identity).await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Retrieve one of the caller's orders
///
/// Orders belonging to other users answer 404, as if they did not exist.
#[utoipa::path(
    get,
    path = "/api/order/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Success when retrieving an order", body = OrderReadDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<OrderReadDto>(Resource::Order, Action::Retrieve)?;

    let identity = identity_from_session(&state, &session).await?;
    let order = OrderService::new(&state.db).get(&identity, id).await?;

    Ok((StatusCode::OK, Json(order)))
}

/// Book one or more seats in a single order
///
/// Either every ticket is booked or none is.
///
/// # Responses
/// - 201 (Created): The order with its tickets
/// - 400 (Bad Request): No tickets, unknown journey, or a seat/cargo outside the train
/// - 401 (Unauthorized): Not logged in
/// - 409 (Conflict): A requested seat is already taken
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/order",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Validation failed", body = FieldErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Seat already taken", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<CreateOrderDto>(Resource::Order, Action::Create)?;

    let identity = identity_from_session(&state, &session).await?;
    let order = OrderService::new(&state.db)
        .create_order(&identity, request)
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Cancel one of the caller's orders, releasing its seats
#[utoipa::path(
    delete,
    path = "/api/order/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    trace_projection::<()>(Resource::Order, Action::Delete)?;

    let identity = identity_from_session(&state, &session).await?;
    OrderService::new(&state.db).delete(&identity, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
