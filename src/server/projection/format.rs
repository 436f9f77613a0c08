//! Display strings shared by read projections.

/// `120.0 km`, `12.5 km`
///
/// Whole distances keep their `.0` so the value always reads as a decimal.
pub fn distance(km: f64) -> String {
    format!("{:?} km", km)
}

/// `"<source> -> <destination> (<distance> km)"`, used by journey listings.
pub fn route_label(source: &str, destination: &str, km: f64) -> String {
    format!("{} -> {} ({})", source, destination, distance(km))
}

/// `"<source> -> <destination> (<train>)"`, used by order tickets.
pub fn journey_label(source: &str, destination: &str, train: &str) -> String {
    format!("{} -> {} ({})", source, destination, train)
}

/// `"<first> <last>"`
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}
