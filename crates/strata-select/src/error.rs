//! Error types for selection construction.

use thiserror::Error;

/// Errors raised when building a selection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectError {
    /// Interval bounds are inverted, NaN, or the tolerance is negative.
    #[error("invalid interval [{low}, {high}] with tolerance {tolerance}")]
    InvalidInterval {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
        /// Tolerance.
        tolerance: f64,
    },

    /// Axis index outside 0..3.
    #[error("invalid axis index {0}, expected 0, 1 or 2")]
    InvalidAxis(usize),

    /// Distance threshold is negative or NaN.
    #[error("invalid distance threshold {0}")]
    InvalidDistance(f64),
}

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectError>;
