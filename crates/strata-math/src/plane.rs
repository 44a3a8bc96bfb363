//! Planes anchored at an origin.

use serde::{Deserialize, Serialize};

use crate::{Orientation, Vector};

/// A plane through `origin` with the given orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// A point on the plane.
    pub origin: Vector,
    /// Orientation (normal) of the plane.
    pub orientation: Orientation,
}

impl Plane {
    /// Create a plane from an origin and orientation.
    pub fn new(origin: impl Into<Vector>, orientation: Orientation) -> Self {
        Self {
            origin: origin.into(),
            orientation,
        }
    }

    /// Create a plane from an origin and a normal vector.
    pub fn from_normal(origin: impl Into<Vector>, normal: impl Into<Vector>) -> Self {
        Self::new(origin, Orientation::from_normal(normal))
    }

    /// Horizontal plane through the origin, normal pointing up.
    pub fn xy() -> Self {
        Self::from_normal(Vector::zeros(), [0.0, 0.0, 1.0])
    }

    /// The plane normal.
    pub fn normal(&self) -> Vector {
        self.orientation.normal()
    }

    /// The plane pole (same as the normal).
    pub fn pole(&self) -> Vector {
        self.orientation.pole()
    }

    /// Signed distance from a point, positive on the normal side.
    pub fn signed_distance(&self, point: &Vector) -> f64 {
        (*point - self.origin).dot(&self.normal().unit())
    }

    /// Closest point on the plane.
    pub fn project_point(&self, point: &Vector) -> Vector {
        *point - self.normal().unit() * self.signed_distance(point)
    }

    /// Same origin, reversed orientation.
    pub fn flip(&self) -> Self {
        Self {
            origin: self.origin,
            orientation: self.orientation.flip(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_signed_distance_ignores_normal_magnitude() {
        let plane = Plane::from_normal([0.0, 0.0, 1.0], [0.0, 0.0, 10.0]);
        assert_relative_eq!(plane.signed_distance(&Vector::new(3.0, 4.0, 3.5)), 2.5);
        assert_relative_eq!(plane.signed_distance(&Vector::new(0.0, 0.0, -1.0)), -2.0);
    }

    #[test]
    fn test_project_point_lands_on_plane() {
        let plane = Plane::new([1.0, 2.0, 3.0], Orientation::from_strike_dip(40.0, 25.0));
        let p = Vector::new(-7.0, 11.0, 0.5);
        let q = plane.project_point(&p);
        assert_abs_diff_eq!(plane.signed_distance(&q), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flip() {
        let plane = Plane::xy();
        let flipped = plane.flip();
        assert_eq!(flipped.normal(), Vector::new(0.0, 0.0, -1.0));
        assert_eq!(flipped.origin, plane.origin);
        assert_eq!(flipped.flip(), plane);
    }
}
