//! Timestamp formatting for read projections.

use chrono::NaiveDateTime;

/// Format used for every timestamp shown to clients, e.g. `2025-11-01 08:30`.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats a UTC timestamp as `YYYY-MM-DD HH:MM`, dropping seconds.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn formats_to_minutes() {
        let timestamp = NaiveDate::from_ymd_opt(2025, 11, 1)
            .unwrap()
            .and_hms_opt(8, 5, 59)
            .unwrap();

        assert_eq!(format_timestamp(timestamp), "2025-11-01 08:05");
    }
}
