//! Period mapping.
//!
//! A period is the index of a bucket for a given [`Interval`], counted from
//! an epoch-aligned origin. Period 0 is the bucket that opens on the Unix
//! epoch or, for weeks, the bucket that opens on the Monday before it.
//!
//! For every interval and period `p`, `period(time(p)) == p`, and for every
//! instant `t`, `time(period(t)) <= t < time(period(t) + 1)`.

use chrono::{DateTime, Datelike, Utc};

use crate::calendar::{
    DAYS_PER_WEEK, EPOCH_YEAR, MONTHS_PER_YEAR, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE,
    MS_PER_SECOND, add_days, days_between, epoch, epoch_week_start, floor_div, midnight_utc,
    start_of_week,
};
use crate::interval::Interval;
use crate::models::{PeriodRange, Span};

impl Interval {
    /// Index of the bucket containing `instant`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use spanbucket_core::{Interval, Span};
    ///
    /// let hourly = Interval::new(1, Span::Hour).unwrap();
    /// let t = Utc.with_ymd_and_hms(1969, 12, 31, 23, 0, 0).single().unwrap();
    /// assert_eq!(hourly.period(t), -1);
    /// ```
    pub fn period(&self, instant: DateTime<Utc>) -> i64 {
        let qty = i64::from(self.qty());
        let ms = instant.timestamp_millis();

        match self.span() {
            Span::Second => floor_div(floor_div(ms, MS_PER_SECOND), qty),
            Span::Minute => floor_div(floor_div(ms, MS_PER_MINUTE), qty),
            Span::Hour => floor_div(floor_div(ms, MS_PER_HOUR), qty),
            // Calendar-day difference rather than raw millisecond division.
            Span::Day => floor_div(
                days_between(instant.date_naive(), epoch().date_naive()),
                qty,
            ),
            Span::Week => week_period(instant, qty),
            Span::Month => {
                let months = i64::from(instant.year() - EPOCH_YEAR) * MONTHS_PER_YEAR
                    + i64::from(instant.month0());
                floor_div(months, qty)
            }
            Span::Year => floor_div(i64::from(instant.year() - EPOCH_YEAR), qty),
        }
    }

    /// Instant that opens `period`.
    ///
    /// Periods whose boundary falls outside chrono's representable range
    /// saturate to `DateTime::<Utc>::MIN_UTC` or `MAX_UTC`.
    pub fn time(&self, period: i64) -> DateTime<Utc> {
        let qty = i64::from(self.qty());

        let opened = match self.span() {
            Span::Second => fixed_time(period, qty, MS_PER_SECOND),
            Span::Minute => fixed_time(period, qty, MS_PER_MINUTE),
            Span::Hour => fixed_time(period, qty, MS_PER_HOUR),
            Span::Day => fixed_time(period, qty, MS_PER_DAY),
            Span::Week => period
                .checked_mul(qty * DAYS_PER_WEEK)
                .and_then(|days| add_days(epoch_week_start(), days))
                .and_then(midnight_utc),
            Span::Month => period.checked_mul(qty).and_then(month_time),
            Span::Year => period
                .checked_mul(qty)
                .and_then(|years| years.checked_add(i64::from(EPOCH_YEAR)))
                .and_then(|year| i32::try_from(year).ok())
                .and_then(|year| chrono::NaiveDate::from_ymd_opt(year, 1, 1))
                .and_then(midnight_utc),
        };

        opened.unwrap_or(if period < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    /// Start of the bucket containing `instant`.
    pub fn start(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.time(self.period(instant))
    }

    /// End of the bucket containing `instant` (the start of the next one).
    pub fn end(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.time(self.period(instant).saturating_add(1))
    }

    /// Start of the bucket after the one containing `instant`.
    pub fn next(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.time(self.period(instant).saturating_add(1))
    }

    /// Start of the bucket before the one containing `instant`.
    pub fn prev(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.time(self.period(instant).saturating_sub(1))
    }

    /// Round `instant` down to its bucket boundary. Same as [`Interval::start`].
    pub fn truncate(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.start(instant)
    }

    /// Periods touching `[from, to]`, as the half-open index range
    /// `[period(from), period(to) + 1)`.
    pub fn range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> PeriodRange {
        PeriodRange {
            from: self.period(from),
            to: self.period(to).saturating_add(1),
        }
    }
}

/// Week periods count from the Monday before the epoch.
///
/// The grouping of raw weeks into buckets of `qty` is deliberately
/// asymmetric for weeks before the anchor: the raw count is bumped by one
/// and a whole `qty` is subtracted along with the truncated remainder. This
/// reproduces the established boundary table exactly.
fn week_period(instant: DateTime<Utc>, qty: i64) -> i64 {
    let week_start = start_of_week(instant.date_naive());
    let diff = days_between(week_start, epoch_week_start());

    let mut weeks = floor_div(diff, DAYS_PER_WEEK);
    let gap = if diff >= 0 {
        weeks - weeks % qty
    } else {
        weeks += 1;
        weeks - qty - weeks % qty
    };
    floor_div(gap, qty)
}

fn fixed_time(period: i64, qty: i64, unit_ms: i64) -> Option<DateTime<Utc>> {
    period
        .checked_mul(qty)
        .and_then(|units| units.checked_mul(unit_ms))
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// First instant of the month `offset` months after January 1970.
fn month_time(offset: i64) -> Option<DateTime<Utc>> {
    let (years, month0) = if offset >= 0 {
        (offset / MONTHS_PER_YEAR, offset % MONTHS_PER_YEAR)
    } else {
        let back = offset.checked_neg()? % MONTHS_PER_YEAR;
        if back == 0 {
            (offset / MONTHS_PER_YEAR, 0)
        } else {
            (offset / MONTHS_PER_YEAR - 1, MONTHS_PER_YEAR - back)
        }
    };

    let year = i32::try_from(years).ok()?.checked_add(EPOCH_YEAR)?;
    let month = u32::try_from(month0 + 1).ok()?;
    chrono::NaiveDate::from_ymd_opt(year, month, 1).and_then(midnight_utc)
}
