use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request is rejected for field-level reasons
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Summary of the failure
    pub error: String,
    /// Offending field mapped to its message; `non_field_errors` when no single field is at fault
    pub fields: BTreeMap<String, String>,
}
