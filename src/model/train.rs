use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrainTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainTypeRequest {
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TrainTypePatch {
    pub name: Option<String>,
}

impl From<TrainTypeRequest> for TrainTypePatch {
    fn from(request: TrainTypeRequest) -> Self {
        Self {
            name: Some(request.name),
        }
    }
}

/// Train rendered for display with its type by name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrainReadDto {
    pub id: i32,
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrainDto {
    pub id: i32,
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainRequest {
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TrainPatch {
    pub name: Option<String>,
    pub cargo_num: Option<i32>,
    pub places_in_cargo: Option<i32>,
    pub train_type: Option<i32>,
}

impl From<TrainRequest> for TrainPatch {
    fn from(request: TrainRequest) -> Self {
        Self {
            name: Some(request.name),
            cargo_num: Some(request.cargo_num),
            places_in_cargo: Some(request.places_in_cargo),
            train_type: Some(request.train_type),
        }
    }
}

/// Query parameters accepted when listing trains
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
pub struct TrainListQuery {
    /// Comma-separated train type ids, e.g. `1,3`
    pub train_type: Option<String>,
}
