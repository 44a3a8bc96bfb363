//! Error types for geometric value construction.

use thiserror::Error;

/// Errors raised while constructing spatial values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpatialError {
    /// A vector was built from a slice that is not 2 or 3 long.
    #[error("vector must have 2 or 3 components, got {0}")]
    WrongLength(usize),

    /// A constructor was called without any of its required parameters.
    #[error("missing required parameters: {0}")]
    MissingParameters(&'static str),

    /// Two supplied parameter families describe different orientations.
    #[error("ambiguous orientation: {0}")]
    AmbiguousOrientation(String),
}

/// Result type for spatial construction.
pub type Result<T> = std::result::Result<T, SpatialError>;
