//! Bucket computation.
//!
//! Ties the period mapping to presentable output: the period index of an
//! instant and the UTC boundaries of its bucket, optionally straight from
//! string input.

use chrono::{DateTime, Utc};

use crate::calendar::format_rfc3339_utc;
use crate::interval::Interval;
use crate::models::{Bucket, BucketResult, InputTimestamp};
use crate::parse::{TimestampFormat, parse_interval, parse_timestamp};

/// Compute the bucket containing `instant`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use spanbucket_core::{Interval, Span, compute_bucket};
///
/// let instant = Utc.with_ymd_and_hms(2017, 6, 26, 5, 30, 0).single().unwrap();
/// let bucket = compute_bucket(instant, &Interval::new(4, Span::Hour).unwrap());
///
/// assert_eq!(bucket.start_utc, "2017-06-26T04:00:00Z");
/// assert_eq!(bucket.end_utc, "2017-06-26T08:00:00Z");
/// ```
pub fn compute_bucket(instant: DateTime<Utc>, interval: &Interval) -> Bucket {
    bucket_for_period(interval.period(instant), interval)
}

/// Compute the bucket for a known period index.
pub fn bucket_for_period(period: i64, interval: &Interval) -> Bucket {
    let start = interval.time(period);
    let end = interval.time(period.saturating_add(1));

    Bucket {
        period,
        start_utc: format_rfc3339_utc(&start),
        end_utc: format_rfc3339_utc(&end),
    }
}

/// Compute a bucket result from a timestamp string and an interval string.
///
/// # Arguments
///
/// * `input` - The timestamp string to parse
/// * `format` - The timestamp format
/// * `interval` - The interval string, e.g. `4hr`
pub fn compute_bucket_from_string(
    input: &str,
    format: TimestampFormat,
    interval: &str,
) -> crate::error::Result<BucketResult> {
    let interval = parse_interval(interval)?;
    let instant = parse_timestamp(input, format)?;

    Ok(BucketResult {
        input: InputTimestamp {
            ts: input.trim().to_string(),
            epoch_ms: instant.timestamp_millis(),
        },
        interval: interval.to_string(),
        bucket: compute_bucket(instant, &interval),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Span;
    use chrono::TimeZone;

    #[test]
    fn week_bucket_before_epoch() {
        let instant = Utc
            .with_ymd_and_hms(1970, 1, 1, 0, 0, 0)
            .single()
            .unwrap();
        let bucket = compute_bucket(instant, &Interval::new(1, Span::Week).unwrap());

        assert_eq!(bucket.period, 0);
        assert_eq!(bucket.start_utc, "1969-12-29T00:00:00Z");
        assert_eq!(bucket.end_utc, "1970-01-05T00:00:00Z");
    }

    #[test]
    fn negative_hour_bucket() {
        let instant = Utc
            .with_ymd_and_hms(1969, 12, 31, 23, 30, 0)
            .single()
            .unwrap();
        let bucket = compute_bucket(instant, &Interval::new(1, Span::Hour).unwrap());

        assert_eq!(bucket.period, -1);
        assert_eq!(bucket.start_utc, "1969-12-31T23:00:00Z");
        assert_eq!(bucket.end_utc, "1970-01-01T00:00:00Z");
    }

    #[test]
    fn month_bucket_across_year_end() {
        let instant = Utc
            .with_ymd_and_hms(2026, 12, 15, 12, 0, 0)
            .single()
            .unwrap();
        let bucket = compute_bucket(instant, &Interval::new(1, Span::Month).unwrap());

        assert_eq!(bucket.start_utc, "2026-12-01T00:00:00Z");
        assert_eq!(bucket.end_utc, "2027-01-01T00:00:00Z");
    }

    #[test]
    fn from_string_epoch_ms() {
        let result =
            compute_bucket_from_string("1498455000000", TimestampFormat::EpochMs, "4hr").unwrap();

        assert_eq!(result.interval, "4hr");
        assert_eq!(result.input.epoch_ms, 1_498_455_000_000);
        assert_eq!(result.bucket.start_utc, "2017-06-26T04:00:00Z");
        assert_eq!(result.bucket.end_utc, "2017-06-26T08:00:00Z");
    }

    #[test]
    fn from_string_rfc3339_echoes_trimmed_input() {
        let result = compute_bucket_from_string(
            " 2017-07-01T00:00:00Z ",
            TimestampFormat::Rfc3339,
            "3wk",
        )
        .unwrap();

        assert_eq!(result.input.ts, "2017-07-01T00:00:00Z");
        assert_eq!(result.bucket.start_utc, "2017-06-26T00:00:00Z");
    }

    #[test]
    fn from_string_rejects_bad_interval() {
        let result = compute_bucket_from_string("0", TimestampFormat::EpochMs, "4 hours");
        assert!(result.is_err());
    }

    #[test]
    fn bucket_serialization() {
        let bucket = bucket_for_period(-1, &Interval::new(1, Span::Year).unwrap());
        assert_eq!(
            serde_json::to_string(&bucket).unwrap(),
            r#"{"period":-1,"start_utc":"1969-01-01T00:00:00Z","end_utc":"1970-01-01T00:00:00Z"}"#
        );
    }
}
