//! Input parsing for intervals and timestamps.
//!
//! Intervals are written as a run of digits followed directly by a span
//! alias, e.g. `4h`, `15mins`, `1wk`. Aliases are case-sensitive.
//!
//! Timestamps are accepted as:
//! - `epoch_ms`: Unix epoch milliseconds (default)
//! - `epoch_s`: Unix epoch seconds
//! - `rfc3339`: RFC3339 formatted strings (e.g., `2017-06-26T05:30:00Z`)
//! - `auto`: any of the above, guessed from the input's shape

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};

use crate::error::{Result, SpanBucketError};
use crate::interval::Interval;
use crate::models::Span;

// Magnitudes above this are read as milliseconds when auto-detecting.
const AUTO_MS_THRESHOLD: u64 = 10_000_000_000;

static SPAN_ALIASES: LazyLock<HashMap<&'static str, Span>> = LazyLock::new(|| {
    Span::ALL
        .iter()
        .flat_map(|&span| span.aliases().iter().map(move |&alias| (alias, span)))
        .collect()
});

impl FromStr for Span {
    type Err = SpanBucketError;

    fn from_str(s: &str) -> Result<Self> {
        SPAN_ALIASES
            .get(s)
            .copied()
            .ok_or_else(|| SpanBucketError::ParseError(format!("Unknown span: '{}'", s)))
    }
}

/// Parse an interval string such as `4hr` or `3weeks`.
///
/// Surrounding whitespace is ignored; whitespace between the number and the
/// span alias is not.
///
/// # Examples
///
/// ```
/// use spanbucket_core::{Span, parse_interval};
///
/// let interval = parse_interval(" 15mins ").unwrap();
/// assert_eq!((interval.qty(), interval.span()), (15, Span::Minute));
/// assert!(parse_interval("hours").is_err());
/// ```
pub fn parse_interval(input: &str) -> Result<Interval> {
    let trimmed = input.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    let (digits, alias) = trimmed.split_at(digits_end);
    if digits.is_empty() {
        return Err(SpanBucketError::ParseError(format!(
            "Invalid interval: '{}'. Expected a quantity followed by a span, e.g. '4hr'",
            trimmed
        )));
    }

    let qty: u32 = digits.parse().map_err(|_| {
        SpanBucketError::ParseError(format!(
            "Invalid interval: '{}'. Quantity out of range",
            trimmed
        ))
    })?;

    let span = alias.parse::<Span>().map_err(|_| {
        SpanBucketError::ParseError(format!(
            "Invalid interval: '{}'. Unknown span '{}'",
            trimmed, alias
        ))
    })?;

    Interval::new(qty, span)
}

/// Supported timestamp formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// Unix epoch milliseconds (e.g., "1498455000000")
    #[default]
    EpochMs,
    /// Unix epoch seconds (e.g., "1498455000")
    EpochS,
    /// RFC3339 format (e.g., "2017-06-26T05:30:00Z")
    Rfc3339,
    /// Guess from the input's shape.
    Auto,
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampFormat::EpochMs => write!(f, "epoch_ms"),
            TimestampFormat::EpochS => write!(f, "epoch_s"),
            TimestampFormat::Rfc3339 => write!(f, "rfc3339"),
            TimestampFormat::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for TimestampFormat {
    type Err = SpanBucketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "epoch_ms" => Ok(TimestampFormat::EpochMs),
            "epoch_s" => Ok(TimestampFormat::EpochS),
            "rfc3339" => Ok(TimestampFormat::Rfc3339),
            "auto" => Ok(TimestampFormat::Auto),
            _ => Err(SpanBucketError::ParseError(format!(
                "Unknown format: '{}'. Expected 'epoch_ms', 'epoch_s', 'rfc3339', or 'auto'",
                s
            ))),
        }
    }
}

/// Parse a timestamp string according to `format`.
///
/// ```
/// use spanbucket_core::{TimestampFormat, parse_timestamp};
///
/// let t = parse_timestamp("2017-06-26T05:30:00Z", TimestampFormat::Rfc3339).unwrap();
/// assert_eq!(t.timestamp(), 1_498_455_000);
/// ```
pub fn parse_timestamp(input: &str, format: TimestampFormat) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    match format {
        TimestampFormat::EpochMs => parse_epoch_ms(trimmed),
        TimestampFormat::EpochS => parse_epoch_s(trimmed),
        TimestampFormat::Rfc3339 => parse_rfc3339(trimmed),
        TimestampFormat::Auto => parse_auto(trimmed),
    }
}

fn parse_integer(input: &str, unit: &str) -> Result<i64> {
    input.parse().map_err(|_| {
        SpanBucketError::ParseError(format!(
            "Invalid epoch {}: '{}'. Expected integer value.",
            unit, input
        ))
    })
}

fn parse_epoch_ms(input: &str) -> Result<DateTime<Utc>> {
    let ms = parse_integer(input, "milliseconds")?;
    DateTime::<Utc>::from_timestamp_millis(ms).ok_or_else(|| {
        SpanBucketError::ParseError(format!("Epoch milliseconds out of range: {}", ms))
    })
}

fn parse_epoch_s(input: &str) -> Result<DateTime<Utc>> {
    let s = parse_integer(input, "seconds")?;
    DateTime::<Utc>::from_timestamp(s, 0)
        .ok_or_else(|| SpanBucketError::ParseError(format!("Epoch seconds out of range: {}", s)))
}

fn parse_rfc3339(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            SpanBucketError::ParseError(format!(
                "Invalid RFC3339 timestamp: '{}'. Error: {}",
                input, e
            ))
        })
}

/// RFC3339 when the input looks like a date, otherwise an epoch number whose
/// unit is picked by magnitude.
fn parse_auto(input: &str) -> Result<DateTime<Utc>> {
    if input.contains('T') || input.contains('Z') || input.contains(':') {
        return parse_rfc3339(input);
    }

    match input.parse::<i64>() {
        Ok(n) if n.unsigned_abs() > AUTO_MS_THRESHOLD => parse_epoch_ms(input),
        Ok(_) => parse_epoch_s(input),
        Err(_) => Err(SpanBucketError::ParseError(format!(
            "Could not auto-detect format for: '{}'",
            input
        ))),
    }
}
