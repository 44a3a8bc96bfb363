//! Physical dimensions as exponent vectors.
//!
//! Equality and hashing are structural: `Dimension::force()` and a
//! hand-built `length · mass · time⁻²` are the same key.

use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// One of the base quantities a [`Dimension`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseQuantity {
    /// Length.
    Length,
    /// Mass.
    Mass,
    /// Time.
    Time,
    /// Plane angle.
    Angle,
}

impl BaseQuantity {
    /// All base quantities in canonical order.
    pub const ALL: [BaseQuantity; 4] = [
        BaseQuantity::Length,
        BaseQuantity::Mass,
        BaseQuantity::Time,
        BaseQuantity::Angle,
    ];

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            BaseQuantity::Length => "length",
            BaseQuantity::Mass => "mass",
            BaseQuantity::Time => "time",
            BaseQuantity::Angle => "angle",
        }
    }
}

impl fmt::Display for BaseQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exponents of length, mass, time and angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    length: i8,
    mass: i8,
    time: i8,
    angle: i8,
}

impl Dimension {
    /// Build a dimension from explicit exponents.
    pub const fn new(length: i8, mass: i8, time: i8, angle: i8) -> Self {
        Self {
            length,
            mass,
            time,
            angle,
        }
    }

    /// No dimension (pure number).
    pub const fn dimensionless() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// `[length]`
    pub const fn length() -> Self {
        Self::new(1, 0, 0, 0)
    }

    /// `[mass]`
    pub const fn mass() -> Self {
        Self::new(0, 1, 0, 0)
    }

    /// `[time]`
    pub const fn time() -> Self {
        Self::new(0, 0, 1, 0)
    }

    /// `[angle]`
    pub const fn angle() -> Self {
        Self::new(0, 0, 0, 1)
    }

    /// `[length]²`
    pub const fn area() -> Self {
        Self::new(2, 0, 0, 0)
    }

    /// `[length]³`
    pub const fn volume() -> Self {
        Self::new(3, 0, 0, 0)
    }

    /// `[length]·[time]⁻¹`
    pub const fn velocity() -> Self {
        Self::new(1, 0, -1, 0)
    }

    /// `[length]·[time]⁻²`
    pub const fn acceleration() -> Self {
        Self::new(1, 0, -2, 0)
    }

    /// `[length]·[mass]·[time]⁻²`
    pub const fn force() -> Self {
        Self::new(1, 1, -2, 0)
    }

    /// `[length]⁻¹·[mass]·[time]⁻²`
    pub const fn pressure() -> Self {
        Self::new(-1, 1, -2, 0)
    }

    /// `[length]⁻³·[mass]`
    pub const fn density() -> Self {
        Self::new(-3, 1, 0, 0)
    }

    /// `[length]²·[mass]·[time]⁻²`
    pub const fn energy() -> Self {
        Self::new(2, 1, -2, 0)
    }

    /// `[length]²·[mass]·[time]⁻³`
    pub const fn power() -> Self {
        Self::new(2, 1, -3, 0)
    }

    /// Exponent of one base quantity.
    pub fn exponent(&self, base: BaseQuantity) -> i8 {
        match base {
            BaseQuantity::Length => self.length,
            BaseQuantity::Mass => self.mass,
            BaseQuantity::Time => self.time,
            BaseQuantity::Angle => self.angle,
        }
    }

    /// True when every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::dimensionless()
    }

    /// Raise to an integer power.
    pub fn powi(&self, n: i8) -> Self {
        Self::new(
            self.length * n,
            self.mass * n,
            self.time * n,
            self.angle * n,
        )
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        Dimension::new(
            self.length + rhs.length,
            self.mass + rhs.mass,
            self.time + rhs.time,
            self.angle + rhs.angle,
        )
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        Dimension::new(
            self.length - rhs.length,
            self.mass - rhs.mass,
            self.time - rhs.time,
            self.angle - rhs.angle,
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("dimensionless");
        }
        let mut first = true;
        for base in BaseQuantity::ALL {
            let exp = self.exponent(base);
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            write!(f, "[{base}]")?;
            if exp != 1 {
                write!(f, "^{exp}")?;
            }
        }
        Ok(())
    }
}
