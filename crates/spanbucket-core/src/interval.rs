//! The [`Interval`] value type.
//!
//! An interval is a validated `(qty, span)` pair such as `4hr` or `3wk`.
//! Construction enforces the hard `1..=255` quantity range; the stricter
//! per-span ceiling is only checked by [`Interval::ensure_valid`].
//!
//! Period mapping lives in [`crate::period`], size comparison and
//! subdivision in [`crate::order`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpanBucketError};
use crate::models::{IntervalData, Span};

/// Largest quantity any interval can carry; it must fit in the low byte of
/// the encoded form.
pub const MAX_QTY: u32 = 0xFF;

/// A bucket size: `qty` units of `span`.
///
/// Immutable once built. The formatted label is computed on first use and
/// cached; it takes no part in equality or hashing.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "IntervalData", into = "IntervalData")]
pub struct Interval {
    qty: u8,
    span: Span,
    label: OnceLock<String>,
}

impl Interval {
    /// Create an interval, rejecting quantities outside `1..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanbucket_core::{Interval, Span};
    ///
    /// let interval = Interval::new(4, Span::Hour).unwrap();
    /// assert_eq!(interval.to_string(), "4hr");
    /// assert!(Interval::new(0, Span::Hour).is_err());
    /// ```
    pub fn new(qty: u32, span: Span) -> Result<Self> {
        let qty = u8::try_from(qty)
            .ok()
            .filter(|&q| q > 0)
            .ok_or(SpanBucketError::InvalidQuantity(qty))?;

        Ok(Self {
            qty,
            span,
            label: OnceLock::new(),
        })
    }

    /// Rebuild an interval from its compact integer form.
    ///
    /// The low 8 bits carry the quantity and everything above them the span
    /// code. The result is validated exactly like [`Interval::new`].
    ///
    /// ```
    /// use spanbucket_core::{Interval, Span};
    ///
    /// let interval = Interval::decode(2817).unwrap();
    /// assert_eq!((interval.qty(), interval.span()), (1, Span::Hour));
    /// ```
    pub fn decode(value: u32) -> Result<Self> {
        let qty = value & MAX_QTY;
        let span = Span::from_code(value >> 8)?;
        Self::new(qty, span)
    }

    /// Compact integer form: `span_code << 8 | qty`.
    ///
    /// Only meaningful as input to [`Interval::decode`].
    pub fn encode(&self) -> u32 {
        self.span.code() << 8 | u32::from(self.qty)
    }

    pub fn qty(&self) -> u8 {
        self.qty
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Plain data view of this interval.
    pub fn data(&self) -> IntervalData {
        IntervalData {
            qty: u32::from(self.qty),
            span: self.span,
        }
    }

    /// Formatted form, e.g. `2hr` or `1wk`. Computed once per value.
    pub fn label(&self) -> &str {
        self.label
            .get_or_init(|| format!("{}{}", self.qty, self.span.abbreviation()))
    }

    /// Reject quantities above the span's ceiling.
    ///
    /// This is opt-in: construction only enforces `1..=255`, so callers that
    /// want to refuse oversized-but-legal intervals (say `200hr`) call this
    /// after building one.
    pub fn ensure_valid(&self) -> Result<()> {
        let max = self.span.max_qty();
        if self.qty > max {
            return Err(SpanBucketError::QuantityTooLarge {
                span: self.span,
                qty: self.qty,
                max,
            });
        }
        Ok(())
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.qty == other.qty && self.span == other.span
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qty.hash(state);
        self.span.hash(state);
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interval")
            .field("qty", &self.qty)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interval {
    type Err = SpanBucketError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse::parse_interval(s)
    }
}

impl TryFrom<IntervalData> for Interval {
    type Error = SpanBucketError;

    fn try_from(data: IntervalData) -> Result<Self> {
        Self::new(data.qty, data.span)
    }
}

impl From<Interval> for IntervalData {
    fn from(interval: Interval) -> Self {
        interval.data()
    }
}
