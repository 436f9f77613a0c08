use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

/// Email and password submitted to register or log in
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}
