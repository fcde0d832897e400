//! # spanbucket-core
//!
//! Epoch-aligned calendar period bucketing for Rust.
//!
//! This library maps instants onto numbered buckets ("periods") of a
//! configurable size such as `4hr`, `3wk` or `1yr`, and maps period numbers
//! back onto their UTC boundaries. Period 0 is always the bucket that opens
//! on the Unix epoch (or, for weeks, on the Monday before it), so every
//! caller groups timestamps into the same deterministic windows.
//!
//! ## Features
//!
//! - **Bidirectional mapping**: `period(time(p)) == p` for every period, and
//!   every instant lies in `[time(period(t)), time(period(t) + 1))`.
//! - **Calendar spans**: seconds through years; days, months and years follow
//!   UTC calendar fields, weeks start on Monday.
//! - **Size comparison**: a best-effort `less` ordering for mixed spans.
//! - **Roll-up checks**: `can_combine` tells whether one interval tiles
//!   another exactly.
//! - **Compact encoding**: intervals pack into a single integer.
//!
//! ## Example
//!
//! ```rust
//! use spanbucket_core::prelude::*;
//!
//! let instant = parse_timestamp("2017-06-26T05:30:00Z", TimestampFormat::Rfc3339).unwrap();
//! let interval: Interval = "4hr".parse().unwrap();
//!
//! let bucket = compute_bucket(instant, &interval);
//! assert_eq!(bucket.start_utc, "2017-06-26T04:00:00Z");
//!
//! let day: Interval = "1d".parse().unwrap();
//! assert!(interval.can_combine(&day));
//! ```

pub mod calendar;
pub mod compute;
pub mod error;
pub mod interval;
pub mod models;
pub mod order;
pub mod parse;
pub mod period;

// Re-export commonly used types at the crate root
pub use compute::{bucket_for_period, compute_bucket, compute_bucket_from_string};
pub use error::{Result, SpanBucketError};
pub use interval::Interval;
pub use models::{Bucket, BucketResult, InputTimestamp, IntervalData, PeriodRange, Span};
pub use parse::{TimestampFormat, parse_interval, parse_timestamp};

/// Prelude module for convenient imports.
///
/// ```
/// use spanbucket_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::calendar::{default_reference, epoch, format_rfc3339_utc};
    pub use crate::compute::{bucket_for_period, compute_bucket, compute_bucket_from_string};
    pub use crate::error::{Result, SpanBucketError};
    pub use crate::interval::Interval;
    pub use crate::models::*;
    pub use crate::parse::{TimestampFormat, parse_interval, parse_timestamp};
}
