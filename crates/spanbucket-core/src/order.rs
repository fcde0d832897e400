//! Interval size comparison and clean subdivision.
//!
//! Bucket sizes for weeks, months and years vary with the instant they are
//! measured at, so comparisons are made at a reference instant. The default
//! reference is fixed; callers sorting intervals should stick to a single
//! reference for a stable order.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, trace, warn};

use crate::calendar::default_reference;
use crate::interval::Interval;
use crate::models::Span;

/// Upper bound on boundary steps taken while checking subdivision.
pub const MAX_COMBINE_STEPS: usize = 64;

impl Interval {
    /// Length of the bucket containing `at`.
    pub fn duration_at(&self, at: DateTime<Utc>) -> TimeDelta {
        let start = self.start(at);
        self.next(start) - start
    }

    /// Best-effort guess whether this interval is smaller than `than`,
    /// measured at the default reference instant.
    ///
    /// ```
    /// use spanbucket_core::{Interval, Span};
    ///
    /// let minute = Interval::new(1, Span::Minute).unwrap();
    /// let hour = Interval::new(1, Span::Hour).unwrap();
    /// assert!(minute.less(&hour));
    /// assert!(!hour.less(&Interval::new(60, Span::Minute).unwrap()));
    /// ```
    pub fn less(&self, than: &Interval) -> bool {
        self.less_at(than, default_reference())
    }

    /// Whether this interval's bucket at `at` is shorter than `than`'s.
    pub fn less_at(&self, than: &Interval, at: DateTime<Utc>) -> bool {
        self.duration_at(at) < than.duration_at(at)
    }

    /// Whether this interval cleanly subdivides `to`.
    ///
    /// True when this interval is smaller than `to` and, starting from
    /// `to`'s period-0 boundary, a whole number of this interval's periods
    /// lands exactly on `to`'s next boundary. For example `4hr` combines into
    /// `1d` but `7hr` does not.
    ///
    /// Weeks never combine into months or years, and months or years never
    /// combine into weeks.
    pub fn can_combine(&self, to: &Interval) -> bool {
        if !self.less(to) {
            trace!(from = %self, to = %to, "not smaller, cannot combine");
            return false;
        }

        let (from_span, to_span) = (self.span(), to.span());
        if (from_span == Span::Week && to_span > Span::Week)
            || (to_span == Span::Week && from_span > Span::Week)
        {
            debug!(from = %self, to = %to, "weeks do not align with months or years");
            return false;
        }

        // Period 0 does not open on the epoch for every span, so measure
        // `to`'s first bucket as if it opened where ours does.
        let offset = to.time(0) - self.time(0);
        let Some(target) = to.time(1).checked_add_signed(offset) else {
            return false;
        };

        // Boundaries strictly increase, so the walk can start just short of
        // the period containing the target instead of at period 0.
        let first = self.period(target).saturating_sub(1).max(0);
        for period in (first..).take(MAX_COMBINE_STEPS) {
            let boundary = self.time(period);
            if boundary == target {
                debug!(from = %self, to = %to, period, "clean subdivision");
                return true;
            }
            if boundary > target {
                debug!(from = %self, to = %to, period, "boundary overshoots");
                return false;
            }
        }

        warn!(
            from = %self,
            to = %to,
            steps = MAX_COMBINE_STEPS,
            "subdivision search did not settle"
        );
        false
    }
}
