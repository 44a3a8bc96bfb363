//! Error types for unit conversion and property validation.

use thiserror::Error;

use crate::{BaseQuantity, Dimension};

/// Errors raised by unit conversion and property construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The unit's physical dimension is not the one required.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension the caller required.
        expected: Dimension,
        /// Dimension actually supplied.
        found: Dimension,
    },

    /// The unit is dimensionally valid but not in the property's allow-list.
    #[error("unit '{unit}' is not allowed for {property}")]
    DisallowedUnit {
        /// Property name.
        property: &'static str,
        /// Offending unit symbol.
        unit: String,
    },

    /// A value lies outside the property's declared range.
    #[error("{property} value {value} {unit} is outside [{min}, {max}]")]
    RangeViolation {
        /// Property name.
        property: &'static str,
        /// First offending value, in `unit`.
        value: f64,
        /// Lower bound converted to `unit`.
        min: f64,
        /// Upper bound converted to `unit`.
        max: f64,
        /// Unit of the value and bounds.
        unit: String,
    },

    /// A required value was not supplied.
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    /// A unit system was given a base unit of the wrong dimension.
    #[error("unit '{unit}' cannot be the {role} base unit")]
    InvalidBaseUnit {
        /// Base quantity the unit was supplied for.
        role: BaseQuantity,
        /// Offending unit symbol.
        unit: String,
    },

    /// Two array values that must pair up have different lengths.
    #[error("array lengths differ: {left} and {right}")]
    ShapeMismatch {
        /// Length of the first array.
        left: usize,
        /// Length of the second array.
        right: usize,
    },

    /// A value is in range but makes a derived quantity infinite or undefined.
    #[error("{property} value {value} gives degenerate elastic moduli")]
    Singular {
        /// Property name.
        property: &'static str,
        /// Offending value.
        value: f64,
    },

    /// No built-in unit system has this name.
    #[error("unknown unit system '{0}'")]
    UnknownSystem(String),
}

/// Result type for unit operations.
pub type Result<T> = std::result::Result<T, UnitError>;
