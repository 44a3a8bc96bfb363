//! Plane orientations in strike/dip and dip/dip-direction conventions.
//!
//! An [`Orientation`] is a plane normal. Its magnitude is not constrained,
//! so callers may carry an area- or weight-scaled normal through it.
//!
//! # Construction precedence
//!
//! [`OrientationBuilder::build`] resolves mixed parameter families in a
//! fixed order:
//!
//! 1. An explicit `normal` (or its alias `pole`) wins outright; every angle
//!    parameter is ignored. Supplying both `normal` and `pole` with
//!    different values is ambiguous.
//! 2. Otherwise the trend of the normal comes from `strike`
//!    (`trend = strike - 90`), else from `dip_direction`
//!    (`trend = dip_direction + 180`), else from `trend`, else 0°.
//!    Supplying both `strike` and `dip_direction` is only accepted when they
//!    agree under the right-hand rule (`dip_direction = strike + 90`).
//! 3. The plunge of the normal comes from `dip` (`plunge = 90 - dip`), else
//!    from `plunge`, else 90° (a horizontal plane).
//!
//! A builder with no parameters at all is rejected.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatialError};
use crate::{wrap_degrees, Tolerance, Vector};

/// Trend used when no trend-bearing parameter is supplied.
pub const DEFAULT_TREND: f64 = 0.0;

/// Plunge used when no plunge-bearing parameter is supplied (dip of 0°).
pub const DEFAULT_PLUNGE: f64 = 90.0;

/// Orientation of a plane, stored as its (possibly weighted) normal vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation(Vector);

impl Orientation {
    /// Orientation with the given normal.
    pub fn from_normal(normal: impl Into<Vector>) -> Self {
        Self(normal.into())
    }

    /// Orientation from strike and dip, right-hand rule.
    pub fn from_strike_dip(strike: f64, dip: f64) -> Self {
        Self(Vector::from_trend_plunge(strike - 90.0, 90.0 - dip))
    }

    /// Orientation from dip and dip-direction.
    pub fn from_dip_direction(dip: f64, dip_direction: f64) -> Self {
        Self(Vector::from_trend_plunge(dip_direction + 180.0, 90.0 - dip))
    }

    /// Orientation whose normal has the given trend and plunge.
    pub fn from_trend_plunge(trend: f64, plunge: f64) -> Self {
        Self(Vector::from_trend_plunge(trend, plunge))
    }

    /// Start a builder for mixed parameter families.
    pub fn builder() -> OrientationBuilder {
        OrientationBuilder::default()
    }

    /// The plane normal.
    pub fn normal(&self) -> Vector {
        self.0
    }

    /// The plane pole (same as the normal).
    pub fn pole(&self) -> Vector {
        self.0
    }

    /// Magnitude of the stored normal.
    pub fn magnitude(&self) -> f64 {
        self.0.magnitude()
    }

    /// Same orientation with a unit normal.
    pub fn unit(&self) -> Self {
        Self(self.0.unit())
    }

    /// Trend of the normal.
    pub fn trend(&self) -> f64 {
        self.0.trend()
    }

    /// Plunge of the normal.
    pub fn plunge(&self) -> f64 {
        self.0.plunge()
    }

    /// Strike, `wrap(trend + 90)`.
    pub fn strike(&self) -> f64 {
        wrap_degrees(self.trend() + 90.0)
    }

    /// Dip, `90 - plunge`.
    pub fn dip(&self) -> f64 {
        90.0 - self.plunge()
    }

    /// Dip-direction, `wrap(trend + 180)`.
    pub fn dip_direction(&self) -> f64 {
        wrap_degrees(self.trend() + 180.0)
    }

    /// Reverse the normal.
    pub fn flip(&self) -> Self {
        Self(self.0.flip())
    }
}

impl From<Vector> for Orientation {
    fn from(normal: Vector) -> Self {
        Self(normal)
    }
}

impl From<Orientation> for Vector {
    fn from(orientation: Orientation) -> Self {
        orientation.0
    }
}

impl AbsDiffEq for Orientation {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Orientation {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

/// Collects any mix of orientation parameters and resolves them once.
///
/// See the module documentation for the precedence rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationBuilder {
    normal: Option<Vector>,
    pole: Option<Vector>,
    strike: Option<f64>,
    dip: Option<f64>,
    dip_direction: Option<f64>,
    trend: Option<f64>,
    plunge: Option<f64>,
}

impl OrientationBuilder {
    /// Explicit plane normal.
    #[must_use]
    pub fn normal(mut self, normal: impl Into<Vector>) -> Self {
        self.normal = Some(normal.into());
        self
    }

    /// Explicit plane pole (alias of the normal).
    #[must_use]
    pub fn pole(mut self, pole: impl Into<Vector>) -> Self {
        self.pole = Some(pole.into());
        self
    }

    /// Strike in degrees.
    #[must_use]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Dip in degrees.
    #[must_use]
    pub fn dip(mut self, dip: f64) -> Self {
        self.dip = Some(dip);
        self
    }

    /// Dip-direction in degrees.
    #[must_use]
    pub fn dip_direction(mut self, dip_direction: f64) -> Self {
        self.dip_direction = Some(dip_direction);
        self
    }

    /// Trend of the normal in degrees.
    #[must_use]
    pub fn trend(mut self, trend: f64) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Plunge of the normal in degrees.
    #[must_use]
    pub fn plunge(mut self, plunge: f64) -> Self {
        self.plunge = Some(plunge);
        self
    }

    /// Resolve the supplied parameters into an orientation.
    pub fn build(self) -> Result<Orientation> {
        let tol = Tolerance::DEFAULT;

        let explicit = match (self.normal, self.pole) {
            (Some(normal), Some(pole)) if !tol.vectors_equal(&normal, &pole) => {
                return Err(SpatialError::AmbiguousOrientation(format!(
                    "normal {:?} and pole {:?} differ",
                    normal.to_array(),
                    pole.to_array()
                )));
            }
            (Some(v), _) | (None, Some(v)) => Some(v),
            (None, None) => None,
        };
        if let Some(normal) = explicit {
            return Ok(Orientation(normal));
        }

        let trend = match (self.strike, self.dip_direction) {
            (Some(strike), Some(dip_direction)) => {
                if !tol.azimuths_equal(strike + 90.0, dip_direction) {
                    return Err(SpatialError::AmbiguousOrientation(format!(
                        "strike {strike} and dip-direction {dip_direction} disagree"
                    )));
                }
                Some(strike - 90.0)
            }
            (Some(strike), None) => Some(strike - 90.0),
            (None, Some(dip_direction)) => Some(dip_direction + 180.0),
            (None, None) => self.trend,
        };
        let plunge = self.dip.map(|dip| 90.0 - dip).or(self.plunge);

        if trend.is_none() && plunge.is_none() {
            return Err(SpatialError::MissingParameters(
                "normal, pole, strike, dip, dip_direction, trend or plunge",
            ));
        }

        Ok(Orientation(Vector::from_trend_plunge(
            trend.unwrap_or(DEFAULT_TREND),
            plunge.unwrap_or(DEFAULT_PLUNGE),
        )))
    }
}
