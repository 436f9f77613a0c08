//! Query filter parsing.

use crate::server::error::validation::ValidationError;

/// Parses a comma-separated list of ids such as `"1,2,3"`.
///
/// Whitespace around each id is ignored. An empty segment or a non-integer id rejects the
/// whole list.
///
/// # Arguments
/// - `field` - Name of the query parameter, reported on failure
/// - `value` - Raw parameter value
///
/// # Returns
/// - `Ok(Vec<i32>)` - Parsed ids in the order given
/// - `Err(ValidationError::MalformedIdList)` - The value is not a list of integers
pub fn parse_id_list(field: &'static str, value: &str) -> Result<Vec<i32>, ValidationError> {
    value
        .split(',')
        .map(|segment| segment.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ValidationError::MalformedIdList {
            field,
            value: value.to_string(),
        })
}
