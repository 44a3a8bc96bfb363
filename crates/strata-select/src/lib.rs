#![warn(missing_docs)]

//! Boolean selection algebra over mesh elements.
//!
//! A [`Selection`] is a predicate that is not bound to any mesh. It is
//! evaluated against anything implementing [`MeshQueries`] for one
//! [`Component`] (cells or points) and yields a [`Mask`].
//!
//! Selections compose with `|` (union), `&` (intersection), `!`
//! (complement) and `-` (difference):
//!
//! ```ignore
//! let band = Selection::coordinate_interval(Axis::Z, -10.0, 0.0)?;
//! let faulted = Selection::group("unit", "fault_zone");
//! let intact = band - faulted;
//! let mask = intact.evaluate(&mesh, Component::Cells);
//! ```

pub mod bounds;
pub mod error;
pub mod mask;
pub mod mesh;
pub mod selection;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use bounds::Aabb3;
pub use error::{Result, SelectError};
pub use mask::Mask;
pub use mesh::{Component, MeshQueries};
pub use selection::{Axis, CoordinateBound, Selection, DEFAULT_TOLERANCE};
pub use surface::{SurfaceDistance, TriangleSurface};

pub use strata_math::Point3;
