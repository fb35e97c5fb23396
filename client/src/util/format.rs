//! Display formatting for API values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime};

/// Calendar date (`YYYY-MM-DD`) of an API timestamp.
///
/// Accepts RFC 3339 and the offset-less ISO form the API emits; anything else
/// is shown as-is.
#[must_use]
pub fn display_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    raw.to_owned()
}
