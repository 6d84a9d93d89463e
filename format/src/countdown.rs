//! Countdown labels such as "Edit (4:07)" for time-limited actions.

use stamp_types::Timestamp;

/// Format remaining seconds as `M:SS`. Negative values clamp to `0:00`.
pub fn format_remaining(remaining: i64) -> String {
    let remaining = remaining.max(0);
    format!("{}:{:02}", remaining / 60, remaining % 60)
}

/// Append the time left until `until` to `text`, e.g. `"Edit (4:07)"`.
pub fn countdown_label(text: &str, until: Timestamp, now: Timestamp) -> String {
    format!("{text} ({})", format_remaining(until.seconds_until(now)))
}
