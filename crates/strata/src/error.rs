//! Top-level error type.

use strata_math::SpatialError;
use strata_meta::MetadataError;
use strata_select::SelectError;
use strata_units::UnitError;
use thiserror::Error;

/// Errors returned by mesh and settings operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrataError {
    /// Vector or orientation construction failed.
    #[error(transparent)]
    Spatial(#[from] SpatialError),

    /// Unit conversion or property validation failed.
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Selection construction failed.
    #[error(transparent)]
    Select(#[from] SelectError),

    /// A metadata read or write failed.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// A cell is empty or references a point that does not exist.
    #[error("cell {cell} is invalid: {reason}")]
    InvalidCell {
        /// Cell index.
        cell: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Settings could not be parsed or hold an invalid value.
    #[error("invalid settings: {0}")]
    Config(String),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, StrataError>;
