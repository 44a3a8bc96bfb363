//! Infinite lines through an origin.

use serde::{Deserialize, Serialize};

use crate::Vector;

/// A line through `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// A point on the line.
    pub origin: Vector,
    /// Direction of the line; magnitude is preserved.
    pub direction: Vector,
}

impl Line {
    /// Create a line from an origin and direction.
    pub fn new(origin: impl Into<Vector>, direction: impl Into<Vector>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// Line through `origin` along a trend and plunge.
    pub fn from_trend_plunge(origin: impl Into<Vector>, trend: f64, plunge: f64) -> Self {
        Self::new(origin, Vector::from_trend_plunge(trend, plunge))
    }

    /// Point at parameter `t`: `origin + t * direction`.
    pub fn point_at(&self, t: f64) -> Vector {
        self.origin + self.direction * t
    }

    /// Same origin, reversed direction.
    pub fn flip(&self) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.flip(),
        }
    }
}
