use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{CliError, CliResult};
use spanbucket_core::{Interval, TimestampFormat, parse_timestamp};

pub fn parse_interval_arg(name: &str, s: &str) -> CliResult<Interval> {
    spanbucket_core::parse_interval(s)
        .map_err(|e| CliError::core(&format!("Invalid {} '{}'", name, s), &e))
}

pub fn parse_format(s: &str) -> CliResult<TimestampFormat> {
    s.parse()
        .map_err(|e| CliError::core(&format!("Invalid format '{}'", s), &e))
}

pub fn parse_rfc3339_arg(name: &str, s: &str) -> CliResult<DateTime<Utc>> {
    parse_timestamp(s, TimestampFormat::Rfc3339)
        .map_err(|e| CliError::core(&format!("Invalid {} timestamp", name), &e))
}

/// Render a bucket length as whole days, hours, minutes and seconds, e.g.
/// `31d` or `1d 4h`.
pub fn format_duration(delta: TimeDelta) -> String {
    let Ok(duration) = delta.to_std() else {
        return delta.to_string();
    };
    humanize(duration)
}

fn humanize(duration: Duration) -> String {
    let total = duration.as_secs();
    let parts = [
        (total / 86_400, "d"),
        (total % 86_400 / 3_600, "h"),
        (total % 3_600 / 60, "m"),
        (total % 60, "s"),
    ];

    let rendered: Vec<String> = parts
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect();

    if rendered.is_empty() {
        "0s".to_string()
    } else {
        rendered.join(" ")
    }
}
