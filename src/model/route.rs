use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Route rendered for display, stations by name and distance with its unit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteReadDto {
    pub id: i32,
    pub source: String,
    pub destination: String,
    /// Distance formatted as `"<value> km"`
    pub distance: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    pub id: i32,
    pub source: i32,
    pub destination: i32,
    pub distance: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteRequest {
    pub source: i32,
    pub destination: i32,
    pub distance: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RoutePatch {
    pub source: Option<i32>,
    pub destination: Option<i32>,
    pub distance: Option<f64>,
}

impl From<RouteRequest> for RoutePatch {
    fn from(request: RouteRequest) -> Self {
        Self {
            source: Some(request.source),
            destination: Some(request.destination),
            distance: Some(request.distance),
        }
    }
}
