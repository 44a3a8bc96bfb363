//! Concrete units: a symbol, a scale factor and a dimension.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitError};
use crate::Dimension;

/// Relative tolerance when comparing unit scale factors.
const FACTOR_TOLERANCE: f64 = 1e-12;

/// A resolved unit.
///
/// `factor` converts one of this unit into the coherent base
/// (metre, kilogram, second, radian). Two units are equal when their
/// dimensions match and their factors agree; the symbol is cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    symbol: Cow<'static, str>,
    factor: f64,
    dimension: Dimension,
}

impl Unit {
    /// Declare a unit with a static symbol.
    pub const fn named(symbol: &'static str, factor: f64, dimension: Dimension) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            factor,
            dimension,
        }
    }

    /// Create a unit with an owned symbol.
    pub fn new(symbol: impl Into<String>, factor: f64, dimension: Dimension) -> Self {
        Self {
            symbol: Cow::Owned(symbol.into()),
            factor,
            dimension,
        }
    }

    /// The pure-number unit.
    pub const fn dimensionless() -> Self {
        Self::named("", 1.0, Dimension::dimensionless())
    }

    /// Display symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Multiplier to the coherent base unit.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Physical dimension.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// True for pure-number units.
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Raise to an integer power.
    pub fn powi(&self, n: i8) -> Unit {
        match n {
            0 => Unit::dimensionless(),
            1 => self.clone(),
            _ => Unit::new(
                format!("{}^{}", self.symbol, n),
                self.factor.powi(i32::from(n)),
                self.dimension.powi(n),
            ),
        }
    }

    /// Multiplier taking a value in `self` to a value in `target`.
    pub fn conversion_factor(&self, target: &Unit) -> Result<f64> {
        if self.dimension != target.dimension {
            return Err(UnitError::DimensionMismatch {
                expected: target.dimension,
                found: self.dimension,
            });
        }
        Ok(self.factor / target.factor)
    }

    fn join(&self, separator: &str, other_symbol: &str) -> String {
        match (self.symbol.is_empty(), other_symbol.is_empty()) {
            (true, _) => other_symbol.to_string(),
            (false, true) => self.symbol.to_string(),
            (false, false) => format!("{}{}{}", self.symbol, separator, other_symbol),
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        let scale = self.factor.abs().max(other.factor.abs());
        self.dimension == other.dimension
            && (self.factor - other.factor).abs() <= FACTOR_TOLERANCE * scale
    }
}

impl Mul for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        Unit::new(
            self.join("*", &rhs.symbol),
            self.factor * rhs.factor,
            self.dimension * rhs.dimension,
        )
    }
}

impl Div for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        let symbol = if self.symbol.is_empty() {
            rhs.powi(-1).symbol.to_string()
        } else {
            self.join("/", &rhs.symbol)
        };
        Unit::new(
            symbol,
            self.factor / rhs.factor,
            self.dimension / rhs.dimension,
        )
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol.is_empty() {
            f.write_str("dimensionless")
        } else {
            f.write_str(&self.symbol)
        }
    }
}
