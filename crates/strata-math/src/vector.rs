//! Three-component vectors with trend/plunge views.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatialError};
use crate::{wrap_degrees, Point3, Vec3};

/// A 3D vector used for positions, directions and weighted normals.
///
/// Trend and plunge are derived from the components on every call, so they
/// can never drift out of sync with the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector(Vec3);

impl Vector {
    /// Create a vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// The zero vector.
    pub fn zeros() -> Self {
        Self(Vec3::zeros())
    }

    /// Build a direction of unit length from a trend and plunge in degrees.
    ///
    /// `x = sin(trend)·cos(plunge)`, `y = cos(trend)·cos(plunge)`,
    /// `z = -sin(plunge)`.
    pub fn from_trend_plunge(trend: f64, plunge: f64) -> Self {
        let (st, ct) = trend.to_radians().sin_cos();
        let (sp, cp) = plunge.to_radians().sin_cos();
        Self::new(st * cp, ct * cp, -sp)
    }

    /// Build a vector from 2 or 3 components; a 2D input gets `z = 0`.
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y] => Ok(Self::new(x, y, 0.0)),
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(SpatialError::WrongLength(components.len())),
        }
    }

    /// X component (east).
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y component (north).
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z component (up).
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Underlying nalgebra vector.
    pub fn as_vec3(&self) -> &Vec3 {
        &self.0
    }

    /// Interpret this vector as a position.
    pub fn to_point(&self) -> Point3 {
        Point3::from(self.0)
    }

    /// Components as an array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Unit vector in the same direction. The zero vector normalizes to itself.
    pub fn unit(&self) -> Self {
        let m = self.magnitude();
        if m == 0.0 {
            *self
        } else {
            Self(self.0 / m)
        }
    }

    /// Same direction, new magnitude. `None` leaves the vector unchanged.
    pub fn scale(&self, size: Option<f64>) -> Self {
        match size {
            Some(size) => self.unit() * size,
            None => *self,
        }
    }

    /// Same direction with the given magnitude.
    pub fn with_magnitude(&self, magnitude: f64) -> Self {
        self.scale(Some(magnitude))
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(&other.0)
    }

    /// Cross product.
    pub fn cross(&self, other: &Vector) -> Vector {
        Self(self.0.cross(&other.0))
    }

    /// Azimuth of the horizontal component, clockwise from north, in `[0, 360)`.
    ///
    /// A vertical (or zero) vector has no horizontal component and reports 0.
    pub fn trend(&self) -> f64 {
        if self.0.x == 0.0 && self.0.y == 0.0 {
            return 0.0;
        }
        wrap_degrees(self.0.x.atan2(self.0.y).to_degrees())
    }

    /// Inclination below the horizontal in `[-90, 90]`; zero vectors report 0.
    pub fn plunge(&self) -> f64 {
        let m = self.magnitude();
        if m == 0.0 {
            return 0.0;
        }
        (-self.0.z / m).clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Same plunge and magnitude, new trend.
    pub fn with_trend(&self, trend: f64) -> Self {
        Self::from_trend_plunge(trend, self.plunge()) * self.magnitude()
    }

    /// Same trend and magnitude, new plunge.
    pub fn with_plunge(&self, plunge: f64) -> Self {
        Self::from_trend_plunge(self.trend(), plunge) * self.magnitude()
    }

    /// Reverse direction, same magnitude.
    pub fn flip(&self) -> Self {
        -*self
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl From<Point3> for Vector {
    fn from(p: Point3) -> Self {
        Self(p.coords)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y, 0.0)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = SpatialError;

    fn try_from(components: &[f64]) -> Result<Self> {
        Self::from_slice(components)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self(-self.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Self(self.0 / rhs)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
