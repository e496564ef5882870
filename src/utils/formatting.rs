//! Formatting utilities used for CLI output.

use chrono::Duration;

/// `2 hours 1 minute`, `1 hour 0 minutes`; negative values get a leading `-`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_minutes();
    let sign = if total < 0 { "-" } else { "" };
    let abs_m = total.abs();

    format!(
        "{}{} {}",
        sign,
        with_unit(abs_m / 60, "hour", "hours"),
        with_unit(abs_m % 60, "minute", "minutes")
    )
}

pub fn with_unit(value: i64, singular: &str, plural: &str) -> String {
    if value == 1 {
        format!("{} {}", value, singular)
    } else {
        format!("{} {}", value, plural)
    }
}
