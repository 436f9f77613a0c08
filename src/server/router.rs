//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so utoipa-axum merges their methods into
/// one route.
///
/// # Registered Endpoints
/// - `GET/POST /api/stations`, `GET/PUT/PATCH/DELETE /api/stations/{id}`
/// - `GET/POST /api/routes`, `GET/PUT/PATCH/DELETE /api/routes/{id}`
/// - `GET/POST /api/train-types`, `GET/PUT/PATCH/DELETE /api/train-types/{id}`
/// - `GET/POST /api/trains`, `GET/PUT/PATCH/DELETE /api/trains/{id}`
/// - `GET/POST /api/crews`, `GET/PUT/PATCH/DELETE /api/crews/{id}`
/// - `GET/POST /api/journeys`, `GET/PUT/PATCH/DELETE /api/journeys/{id}`
/// - `GET/POST /api/order`, `GET/DELETE /api/order/{id}`
/// - `POST /api/auth/register`, `POST /api/auth/login`, `POST /api/auth/logout`
/// - `GET /api/auth/user`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, password_hash_cost }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Railway", description = "Train ticket booking API"), tags(
        (name = controller::station::STATION_TAG, description = "Stations"),
        (name = controller::route::ROUTE_TAG, description = "Routes between stations"),
        (name = controller::train_type::TRAIN_TYPE_TAG, description = "Train types"),
        (name = controller::train::TRAIN_TAG, description = "Trains and their capacity"),
        (name = controller::crew::CREW_TAG, description = "Crew members"),
        (name = controller::journey::JOURNEY_TAG, description = "Scheduled journeys"),
        (name = controller::order::ORDER_TAG, description = "Ticket orders of the logged in user"),
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::station::list_stations,
            controller::station::create_station
        ))
        .routes(routes!(
            controller::station::get_station,
            controller::station::update_station,
            controller::station::patch_station,
            controller::station::delete_station
        ))
        .routes(routes!(
            controller::route::list_routes,
            controller::route::create_route
        ))
        .routes(routes!(
            controller::route::get_route,
            controller::route::update_route,
            controller::route::patch_route,
            controller::route::delete_route
        ))
        .routes(routes!(
            controller::train_type::list_train_types,
            controller::train_type::create_train_type
        ))
        .routes(routes!(
            controller::train_type::get_train_type,
            controller::train_type::update_train_type,
            controller::train_type::patch_train_type,
            controller::train_type::delete_train_type
        ))
        .routes(routes!(
            controller::train::list_trains,
            controller::train::create_train
        ))
        .routes(routes!(
            controller::train::get_train,
            controller::train::update_train,
            controller::train::patch_train,
            controller::train::delete_train
        ))
        .routes(routes!(
            controller::crew::list_crews,
            controller::crew::create_crew
        ))
        .routes(routes!(
            controller::crew::get_crew,
            controller::crew::update_crew,
            controller::crew::patch_crew,
            controller::crew::delete_crew
        ))
        .routes(routes!(
            controller::journey::list_journeys,
            controller::journey::create_journey
        ))
        .routes(routes!(
            controller::journey::get_journey,
            controller::journey::update_journey,
            controller::journey::patch_journey,
            controller::journey::delete_journey
        ))
        .routes(routes!(
            controller::order::list_orders,
            controller::order::create_order
        ))
        .routes(routes!(
            controller::order::get_order,
            controller::order::delete_order
        ))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
