//! Core data types for spanbucket.
//!
//! This module defines the plain data types used throughout the library:
//! - [`Span`] - Bucket granularity (second through year)
//! - [`IntervalData`] - Serializable `(qty, span)` record of an interval
//! - [`PeriodRange`] - Half-open range of period indices
//! - [`Bucket`] - A computed bucket with its boundaries
//! - [`InputTimestamp`] - Parsed input timestamp
//! - [`BucketResult`] - Complete result for a bucket operation
//!
//! The [`Interval`](crate::interval::Interval) value type itself lives in
//! its own module.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpanBucketError};

/// Bucket granularity.
///
/// Variants are declared in order of increasing nominal duration, so the
/// derived ordering can be used to ask whether one span is coarser than
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    Second,
    Minute,
    Hour,
    /// UTC calendar day
    Day,
    /// Monday-based UTC week
    Week,
    /// UTC calendar month
    Month,
    /// UTC calendar year
    Year,
}

impl Span {
    /// All spans, finest first.
    pub const ALL: [Span; 7] = [
        Span::Second,
        Span::Minute,
        Span::Hour,
        Span::Day,
        Span::Week,
        Span::Month,
        Span::Year,
    ];

    /// Numeric code used in the compact encoding.
    pub const fn code(self) -> u32 {
        match self {
            Span::Second => 9,
            Span::Minute => 10,
            Span::Hour => 11,
            Span::Day => 12,
            Span::Week => 13,
            Span::Month => 14,
            Span::Year => 15,
        }
    }

    /// Look up a span by its numeric code.
    pub fn from_code(code: u32) -> Result<Span> {
        Span::ALL
            .into_iter()
            .find(|span| span.code() == code)
            .ok_or(SpanBucketError::InvalidSpan(code))
    }

    /// Canonical abbreviation, used for formatting.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Span::Second => "sec",
            Span::Minute => "min",
            Span::Hour => "hr",
            Span::Day => "d",
            Span::Week => "wk",
            Span::Month => "mo",
            Span::Year => "yr",
        }
    }

    /// Every spelling accepted by the interval parser (case-sensitive).
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Span::Second => &["s", "sec", "secs", "second", "seconds"],
            Span::Minute => &["min", "mins", "minute", "minutes"],
            Span::Hour => &["h", "hr", "hrs", "hour", "hours"],
            Span::Day => &["d", "ds", "day", "days"],
            Span::Week => &["w", "ws", "wk", "wks", "weeks"],
            Span::Month => &["mo", "mos", "month", "months"],
            Span::Year => &["y", "yr", "ys", "yrs", "year", "years"],
        }
    }

    /// Largest quantity accepted by `Interval::ensure_valid` for this span.
    ///
    /// Stricter than the hard 255 limit enforced at construction.
    pub const fn max_qty(self) -> u8 {
        match self {
            Span::Second => 60,
            Span::Minute => 90,
            Span::Hour => 48,
            Span::Day => 120,
            Span::Week => 52,
            Span::Month => 24,
            Span::Year => 255,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Plain `(qty, span)` record of an interval.
///
/// Carries no cached state and performs no validation on its own; convert
/// with `Interval::try_from` to get a checked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalData {
    pub qty: u32,
    pub span: Span,
}

/// Half-open range `[from, to)` of period indices for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodRange {
    pub from: i64,
    pub to: i64,
}

impl PeriodRange {
    /// Number of periods in the range.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.to.abs_diff(self.from)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }

    pub fn contains(&self, period: i64) -> bool {
        period >= self.from && period < self.to
    }

    /// Iterate over every period index in the range.
    pub fn periods(&self) -> Range<i64> {
        self.from..self.to
    }
}

impl IntoIterator for PeriodRange {
    type Item = i64;
    type IntoIter = Range<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods()
    }
}

/// A computed bucket: its period index and UTC boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Period index relative to the interval's epoch-aligned origin.
    pub period: i64,
    /// Bucket start in UTC (RFC3339 format with Z suffix).
    pub start_utc: String,
    /// Bucket end (start of the next bucket) in UTC.
    pub end_utc: String,
}

/// Parsed input timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputTimestamp {
    /// Original input string.
    pub ts: String,
    /// Epoch milliseconds (UTC).
    pub epoch_ms: i64,
}

/// Complete result of a bucket computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketResult {
    /// The input timestamp that was processed.
    pub input: InputTimestamp,
    /// Formatted interval, e.g. `4hr`.
    pub interval: String,
    /// The computed bucket.
    pub bucket: Bucket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_codes_round_trip() {
        for span in Span::ALL {
            assert_eq!(Span::from_code(span.code()).unwrap(), span);
        }
        assert_eq!(Span::Second.code(), 9);
        assert_eq!(Span::Year.code(), 15);
    }

    #[test]
    fn unknown_span_code() {
        assert_eq!(Span::from_code(8), Err(SpanBucketError::InvalidSpan(8)));
        assert_eq!(Span::from_code(16), Err(SpanBucketError::InvalidSpan(16)));
    }

    #[test]
    fn span_order_follows_duration() {
        assert!(Span::Second < Span::Minute);
        assert!(Span::Day < Span::Week);
        assert!(Span::Week < Span::Month);
        assert!(Span::Month < Span::Year);
    }

    #[test]
    fn span_display() {
        let shown: Vec<String> = Span::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(shown, ["sec", "min", "hr", "d", "wk", "mo", "yr"]);
    }

    #[test]
    fn canonical_abbreviation_is_an_alias() {
        for span in Span::ALL {
            assert!(span.aliases().contains(&span.abbreviation()));
        }
    }

    #[test]
    fn span_serialization() {
        assert_eq!(serde_json::to_string(&Span::Hour).unwrap(), "\"hour\"");
        assert_eq!(
            serde_json::from_str::<Span>("\"month\"").unwrap(),
            Span::Month
        );
    }

    #[test]
    fn period_range_iteration() {
        let range = PeriodRange { from: -2, to: 2 };
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
        assert!(range.contains(-2));
        assert!(!range.contains(2));
        assert_eq!(range.into_iter().collect::<Vec<_>>(), [-2, -1, 0, 1]);
    }

    #[test]
    fn empty_period_range() {
        let range = PeriodRange { from: 3, to: 3 };
        assert_eq!(range.len(), 0);
        assert!(range.is_empty());
    }
}
