#![warn(missing_docs)]

//! Typed per-element field storage for meshes.
//!
//! A [`MetadataStore`] belongs to one mesh and one [`Component`]. Fields are
//! keyed `role:name` ([`FieldKey`]) and hold either unit-bearing numbers or
//! fixed-width text, one entry per element. Reads and writes are scoped by
//! a [`Selection`].
//!
//! Writes are strict: the first write fixes a field's baseline unit, and a
//! later write in a different unit must cover every element. Reads are
//! lenient: a missing field reads as missing sentinels (NaN or empty text),
//! and numeric values convert to any unit of the same dimension.
//!
//! [`Component`]: strata_select::Component
//! [`Selection`]: strata_select::Selection

pub mod column;
pub mod error;
pub mod key;
pub mod store;
pub mod target;
pub mod value;

pub use column::{Column, ColumnKind, NumericColumn, TextColumn};
pub use error::{MetadataError, Result};
pub use key::{FieldKey, Role};
pub use store::MetadataStore;
pub use target::Target;
pub use value::{FieldInput, FieldValues, TextInput};
