//! Error types for spanbucket-core.
//!
//! Every failure in this crate is a local validation failure: an unknown
//! span code, a quantity outside the hard range, a quantity over the span's
//! ceiling, or unparseable input. Nothing is retried or recovered internally.

use thiserror::Error;

use crate::models::Span;

/// The main error type for spanbucket operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanBucketError {
    /// Span code not in the known set.
    #[error("Invalid span: {0}")]
    InvalidSpan(u32),

    /// Quantity outside the hard 1..=255 range.
    #[error("Invalid quantity: {0} (must be > 0 and <= 255)")]
    InvalidQuantity(u32),

    /// Quantity over the span-specific ceiling checked by `ensure_valid`.
    #[error("Quantity too large for {span}: expected <= {max}, found {qty}")]
    QuantityTooLarge { span: Span, qty: u8, max: u8 },

    /// Malformed interval or timestamp input.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SpanBucketError {
    /// Stable machine-readable name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            SpanBucketError::InvalidSpan(_) => "invalid_span",
            SpanBucketError::InvalidQuantity(_) => "invalid_quantity",
            SpanBucketError::QuantityTooLarge { .. } => "quantity_too_large",
            SpanBucketError::ParseError(_) => "parse_error",
        }
    }
}

/// Result type alias for spanbucket operations.
pub type Result<T> = std::result::Result<T, SpanBucketError>;
