#![warn(missing_docs)]

//! Geometric value types for geoscience mesh work.
//!
//! Thin wrappers around nalgebra that speak the field geologist's
//! conventions: directions by trend and plunge, planes by strike and dip
//! (or dip and dip-direction), plus lines and planes anchored at an
//! origin. Every type is a plain value; operations return new values.
//!
//! Angles are in degrees. Trend is measured clockwise from north (`+y`),
//! plunge is positive downward (`-z`).
//!
//! ```
//! use strata_math::{Orientation, Project, Vector};
//!
//! let lineation = Vector::from_trend_plunge(30.0, 45.0);
//! let bedding = Orientation::from_dip_direction(34.0, 55.0);
//!
//! let in_plane = lineation.project(&bedding);
//! assert!(in_plane.dot(&bedding.normal()).abs() < 1e-12);
//! ```

pub mod error;
pub mod line;
pub mod orientation;
pub mod plane;
pub mod project;
pub mod vector;

pub use error::{Result, SpatialError};
pub use line::Line;
pub use orientation::{Orientation, OrientationBuilder};
pub use plane::Plane;
pub use project::Project;
pub use vector::Vector;

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A raw 3-component vector.
pub type Vec3 = Vector3<f64>;

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Smallest absolute difference between two azimuths, in degrees.
pub fn azimuth_difference(a: f64, b: f64) -> f64 {
    let d = wrap_degrees(a - b);
    d.min(360.0 - d)
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in degrees.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-6 degrees angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-6,
    };

    /// Check if two vectors are coincident within tolerance.
    pub fn vectors_equal(&self, a: &Vector, b: &Vector) -> bool {
        (*a - *b).magnitude() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two azimuths agree, treating 0° and 360° as the same angle.
    pub fn azimuths_equal(&self, a: f64, b: f64) -> bool {
        azimuth_difference(a, b) < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
