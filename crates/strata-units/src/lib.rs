#![warn(missing_docs)]

//! Dimensional unit bookkeeping for geoscience properties.
//!
//! Units are resolved values (symbol, scale factor, [`Dimension`]); this
//! crate never parses unit expressions. It provides:
//!
//! - [`Dimension`]: structural exponent vectors over length, mass, time
//!   and angle.
//! - [`Unit`] and the [`units`] catalogue of common concrete units.
//! - [`Quantity`]: a scalar or array magnitude tagged with a unit.
//! - [`UnitSystem`]: base units plus derived overrides, with the SI, MKS,
//!   CGS and US built-ins.
//! - [`Property`]: a named, dimensioned, range-checked quantity declared
//!   by a [`PropertyKind`].
//! - [`Elastic`]: bulk and shear moduli, built from (K, G) or (E, ν).
//!
//! ```
//! use strata_units::{kinds, units, Property, UnitSystem};
//!
//! let si = UnitSystem::si();
//! let phi = Property::new(&kinds::FRICTION_ANGLE, 30.0, &si).unwrap();
//! assert_eq!(phi.quantity().unit, units::DEGREE);
//!
//! assert!(Property::new(&kinds::FRICTION_ANGLE, 95.0, &si).is_err());
//! ```

pub mod dimension;
pub mod elastic;
pub mod error;
pub mod kinds;
pub mod property;
pub mod quantity;
pub mod system;
pub mod unit;
pub mod units;

pub use dimension::{BaseQuantity, Dimension};
pub use elastic::Elastic;
pub use error::{Result, UnitError};
pub use property::{Property, PropertyInput, PropertyKind};
pub use quantity::{Magnitude, Quantity};
pub use system::UnitSystem;
pub use unit::Unit;
