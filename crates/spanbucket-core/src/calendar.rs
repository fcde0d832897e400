//! Calendar primitives.
//!
//! Low-level UTC calendar arithmetic shared by the period mapping: the
//! epoch and its week anchor, day and week boundaries, and the signed
//! floor division every span family relies on.
//!
//! All calendar fields are read in UTC. Nothing here models time zones or
//! leap seconds.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const DAYS_PER_WEEK: i64 = 7;
pub const MONTHS_PER_YEAR: i64 = 12;

/// Calendar year of the epoch.
pub const EPOCH_YEAR: i32 = 1970;

/// 2018-01-01T12:00:00Z in epoch seconds.
const DEFAULT_REFERENCE_SECS: i64 = 1_514_808_000;

// The epoch is a Thursday, so week periods count from the Monday before it.
static EPOCH_WEEK_START: LazyLock<NaiveDate> =
    LazyLock::new(|| start_of_week(epoch().date_naive()));

// Midday on a non-leap January 1st, away from month and year ends.
static DEFAULT_REFERENCE: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| epoch() + TimeDelta::seconds(DEFAULT_REFERENCE_SECS));

/// The Unix epoch, 1970-01-01T00:00:00Z.
pub fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Monday of the UTC week containing the epoch (1969-12-29).
pub fn epoch_week_start() -> NaiveDate {
    *EPOCH_WEEK_START
}

/// Reference instant used when comparing interval sizes without an
/// explicit instant.
pub fn default_reference() -> DateTime<Utc> {
    *DEFAULT_REFERENCE
}

/// Signed floor division of `count` by a positive `qty`.
///
/// Rust's `%` truncates toward zero, so for negative counts the remainder is
/// pulled back by a whole `qty` before dividing. The result always rounds
/// toward negative infinity: `floor_div(-1, 4) == -1`.
pub fn floor_div(count: i64, qty: i64) -> i64 {
    if count >= 0 {
        return (count - count % qty) / qty;
    }

    let mut out = count;
    let gap = count % qty;
    if gap != 0 {
        out -= qty + gap;
    }
    out / qty
}

/// Monday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = i64::from(date.weekday().num_days_from_monday());
    date.checked_sub_signed(TimeDelta::days(back))
        .unwrap_or(NaiveDate::MIN)
}

/// Whole calendar days from `earlier` to `later` (negative if `later` is
/// before `earlier`).
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// UTC midnight opening `date`.
pub fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// Calendar date `days` after (or before) `date`.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

/// Format a UTC datetime as RFC3339 with Z suffix.
///
/// Whole seconds are printed without a fraction; sub-second instants keep
/// their milliseconds (e.g. `1969-12-31T23:59:59.999Z`).
pub fn format_rfc3339_utc(dt: &DateTime<Utc>) -> String {
    if dt.timestamp_subsec_millis() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}
