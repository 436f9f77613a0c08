use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CrewReadDto {
    pub id: i32,
    pub full_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CrewDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CrewRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CrewPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<CrewRequest> for CrewPatch {
    fn from(request: CrewRequest) -> Self {
        Self {
            first_name: Some(request.first_name),
            last_name: Some(request.last_name),
        }
    }
}
