use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JourneyListDto {
    pub id: i32,
    /// `"<source> -> <destination> (<distance> km)"`
    pub route: String,
    /// `YYYY-MM-DD HH:MM`
    pub departure_time: String,
    pub tickets_taken: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JourneyDetailDto {
    pub id: i32,
    pub route: String,
    pub train: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub crews: Vec<String>,
    pub taken_seats: Vec<TakenSeatsDto>,
}

/// Occupied seats of one cargo, ascending and joined by `", "`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TakenSeatsDto {
    pub cargo: i32,
    pub seat: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JourneyDto {
    pub id: i32,
    pub route: i32,
    pub train: i32,
    pub crews: Vec<i32>,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct JourneyRequest {
    pub route: i32,
    pub train: i32,
    #[serde(default)]
    pub crews: Vec<i32>,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct JourneyPatch {
    pub route: Option<i32>,
    pub train: Option<i32>,
    pub crews: Option<Vec<i32>>,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
}

impl From<JourneyRequest> for JourneyPatch {
    fn from(request: JourneyRequest) -> Self {
        Self {
            route: Some(request.route),
            train: Some(request.train),
            crews: Some(request.crews),
            departure_time: Some(request.departure_time),
            arrival_time: Some(request.arrival_time),
        }
    }
}
