#![warn(missing_docs)]

//! strata: geoscience attributes on polygonal meshes
//!
//! Ties together orientations ([`math`]), unit-checked properties
//! ([`units`]), element selections ([`select`]) and per-element metadata
//! ([`meta`]) on a single [`Mesh`].
//!
//! # Example
//!
//! ```rust
//! use strata::meta::FieldKey;
//! use strata::select::{Axis, Component, Selection};
//! use strata::units::units;
//! use strata::{Mesh, Point3};
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(2.0, 1.0, 0.0),
//! ];
//! let cells = vec![vec![0, 1, 4, 3], vec![1, 2, 5, 4]];
//! let mut mesh = Mesh::new(points, cells).unwrap();
//!
//! let density = FieldKey::property("density");
//! mesh.write(Component::Cells, &density, &Selection::All, 2700.0).unwrap();
//!
//! // partial writes must stay in the baseline unit
//! let east = Selection::coordinate_interval(Axis::X, 1.0, 2.0).unwrap();
//! assert!(mesh
//!     .write(Component::Cells, &density, &east, (2.5, units::GRAM_PER_CUBIC_CENTIMETER))
//!     .is_err());
//! mesh.write(Component::Cells, &density, &east, 2500.0).unwrap();
//!
//! let values = mesh.read(Component::Cells, &density, &Selection::All).unwrap();
//! assert_eq!(values.as_numbers().unwrap(), &[2700.0, 2500.0]);
//! ```

pub mod error;
pub mod mesh;
pub mod settings;

pub use error::{Result, StrataError};
pub use mesh::Mesh;
pub use settings::{Settings, GRAVITATIONAL_ACCELERATION, WATER_DENSITY};

pub use strata_math as math;
pub use strata_meta as meta;
pub use strata_select as select;
pub use strata_units as units;

pub use strata_math::{Orientation, Plane, Point3, Vector};
pub use strata_meta::{FieldKey, FieldValues};
pub use strata_select::{Component, Selection};
