//! Date helper functions

use chrono::{DateTime, Local};

/// Format an epoch-milliseconds timestamp in local time
///
/// Returns `None` when the value is outside the representable range.
pub fn format_timestamp_ms(ms: i64, format: &str) -> Option<String> {
    let date = DateTime::from_timestamp_millis(ms)?.with_timezone(&Local);
    Some(date.format(format).to_string())
}
