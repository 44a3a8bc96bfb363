//! Error types for metadata reads and writes.

use strata_select::Component;
use strata_units::UnitError;
use thiserror::Error;

use crate::ColumnKind;

/// Errors raised by the metadata store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// A partial write used a unit other than the field's baseline.
    #[error(
        "field '{field}' is stored in {baseline}; writing {unit} requires selecting every element"
    )]
    UnitRebase {
        /// Field key.
        field: String,
        /// Baseline unit symbol.
        baseline: String,
        /// Rejected unit symbol.
        unit: String,
    },

    /// The mesh or selection does not have the store's element count.
    #[error("{component} store holds {expected} elements, got {found}")]
    ElementCountMismatch {
        /// Component the store is bound to.
        component: Component,
        /// Store length.
        expected: usize,
        /// Length supplied.
        found: usize,
    },

    /// An array value does not have one entry per selected element.
    #[error("field '{field}' expects {expected} values, got {found}")]
    LengthMismatch {
        /// Field key.
        field: String,
        /// Number of selected elements.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },

    /// Numeric data written to a text field or the reverse.
    #[error("field '{field}' holds {expected} data, got {found}")]
    KindMismatch {
        /// Field key.
        field: String,
        /// Kind the field holds.
        expected: ColumnKind,
        /// Kind supplied.
        found: ColumnKind,
    },

    /// Text contains a NUL byte.
    #[error("text value {0:?} contains a NUL byte")]
    InvalidText(String),

    /// A field key is not `role:name`.
    #[error("invalid field key '{0}', expected property:, field:, group: or bc: prefix")]
    InvalidKey(String),

    /// Unit conversion or property validation failed.
    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Result type for metadata operations.
pub type Result<T> = std::result::Result<T, MetadataError>;
