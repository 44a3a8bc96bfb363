//! Magnitudes tagged with a unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{Dimension, Unit};

/// A scalar or an array of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Magnitude {
    /// A single value.
    Scalar(f64),
    /// One value per element.
    Array(Vec<f64>),
}

impl Magnitude {
    /// Values as a slice; a scalar is a slice of one.
    pub fn values(&self) -> &[f64] {
        match self {
            Magnitude::Scalar(v) => std::slice::from_ref(v),
            Magnitude::Array(values) => values,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// True for an empty array.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// The scalar value, if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Magnitude::Scalar(v) => Some(*v),
            Magnitude::Array(_) => None,
        }
    }

    /// Apply `f` to every value.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Magnitude {
        match self {
            Magnitude::Scalar(v) => Magnitude::Scalar(f(*v)),
            Magnitude::Array(values) => Magnitude::Array(values.iter().map(|&v| f(v)).collect()),
        }
    }
}

impl From<f64> for Magnitude {
    fn from(v: f64) -> Self {
        Magnitude::Scalar(v)
    }
}

impl From<Vec<f64>> for Magnitude {
    fn from(values: Vec<f64>) -> Self {
        Magnitude::Array(values)
    }
}

impl From<&[f64]> for Magnitude {
    fn from(values: &[f64]) -> Self {
        Magnitude::Array(values.to_vec())
    }
}

/// A magnitude with a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Numeric part.
    pub magnitude: Magnitude,
    /// Unit of every value in `magnitude`.
    pub unit: Unit,
}

impl Quantity {
    /// Create a quantity.
    pub fn new(magnitude: impl Into<Magnitude>, unit: Unit) -> Self {
        Self {
            magnitude: magnitude.into(),
            unit,
        }
    }

    /// Physical dimension of the unit.
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Scalar value, if this is a scalar quantity.
    pub fn value(&self) -> Option<f64> {
        self.magnitude.as_scalar()
    }

    /// Convert to another unit of the same dimension.
    pub fn to(&self, unit: &Unit) -> Result<Quantity> {
        let factor = self.unit.conversion_factor(unit)?;
        Ok(Quantity {
            magnitude: self.magnitude.map(|v| v * factor),
            unit: unit.clone(),
        })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.magnitude {
            Magnitude::Scalar(v) => write!(f, "{v}")?,
            Magnitude::Array(values) => write!(f, "{values:?}")?,
        }
        if !self.unit.symbol().is_empty() {
            write!(f, " {}", self.unit.symbol())?;
        }
        Ok(())
    }
}
