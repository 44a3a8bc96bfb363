//! Explicit run settings: unit system, gravity and water density.
//!
//! Settings are a value handed to the mesh, never global state. They load
//! from TOML:
//!
//! ```toml
//! units = "CGS"
//!
//! [gravity]
//! direction = [0.0, 0.0, -1.0]
//! magnitude = 981.0          # bare numbers use the file's unit system
//!
//! [water_density]
//! value = 1.0
//! unit = "g/cm^3"
//! ```

use serde::Deserialize;
use strata_math::Vector;
use strata_units::{
    kinds, units, Dimension, Magnitude, Property, PropertyInput, PropertyKind, Quantity, Unit,
    UnitSystem,
};

use crate::error::{Result, StrataError};

/// Standard gravitational acceleration.
pub const GRAVITATIONAL_ACCELERATION: Quantity = Quantity {
    magnitude: Magnitude::Scalar(9.81),
    unit: units::METER_PER_SECOND_SQUARED,
};

/// Density of fresh water.
pub const WATER_DENSITY: Quantity = Quantity {
    magnitude: Magnitude::Scalar(1000.0),
    unit: units::KILOGRAM_PER_CUBIC_METER,
};

static GRAVITY: PropertyKind = PropertyKind {
    name: "gravity",
    dimension: Dimension::acceleration(),
    min: 0.0,
    max: f64::INFINITY,
    limit_unit: units::METER_PER_SECOND_SQUARED,
    allowed_units: None,
};

/// Unit system and physical constants used by a mesh.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SettingsFile")]
pub struct Settings {
    units: UnitSystem,
    gravity_direction: Vector,
    gravity: Quantity,
    water_density: Quantity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            units: UnitSystem::si(),
            gravity_direction: Vector::new(0.0, 0.0, -1.0),
            gravity: GRAVITATIONAL_ACCELERATION,
            water_density: WATER_DENSITY,
        }
    }
}

impl Settings {
    /// Parse settings from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| StrataError::Config(e.message().to_string()))
    }

    /// Active unit system.
    pub fn units(&self) -> &UnitSystem {
        &self.units
    }

    /// Unit vector gravity points along.
    pub fn gravity_direction(&self) -> Vector {
        self.gravity_direction
    }

    /// Gravitational acceleration, in the unit it was given.
    pub fn gravity(&self) -> &Quantity {
        &self.gravity
    }

    /// Gravity as a vector in the active system's acceleration unit.
    pub fn gravity_vector(&self) -> Vector {
        let magnitude = self.units.convert(&self.gravity).value().unwrap_or(0.0);
        self.gravity_direction * magnitude
    }

    /// Water density, in the unit it was given.
    pub fn water_density(&self) -> &Quantity {
        &self.water_density
    }

    /// Replace the unit system.
    #[must_use]
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Replace the gravity direction. The vector is normalized; a zero
    /// vector is rejected.
    pub fn with_gravity_direction(mut self, direction: impl Into<Vector>) -> Result<Self> {
        let direction = direction.into();
        if !(direction.magnitude() > 0.0) {
            return Err(StrataError::Config(
                "gravity direction must be a non-zero vector".to_string(),
            ));
        }
        self.gravity_direction = direction.unit();
        Ok(self)
    }

    /// Replace the gravity magnitude. Bare numbers use the active system's
    /// acceleration unit.
    pub fn with_gravity_magnitude(mut self, value: impl Into<PropertyInput>) -> Result<Self> {
        let gravity = Property::new(&GRAVITY, value, &self.units)?;
        self.gravity = scalar(gravity)?;
        Ok(self)
    }

    /// Replace the water density. Bare numbers use the active system's
    /// density unit.
    pub fn with_water_density(mut self, value: impl Into<PropertyInput>) -> Result<Self> {
        let density = Property::new(&kinds::DENSITY, value, &self.units)?;
        self.water_density = scalar(density)?;
        Ok(self)
    }
}

fn scalar(property: Property) -> Result<Quantity> {
    let quantity = property.quantity();
    if quantity.value().is_none() {
        return Err(StrataError::Config(format!(
            "{} must be a single value",
            property.name()
        )));
    }
    Ok(quantity.clone())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    units: Option<String>,
    gravity: Option<GravityFile>,
    water_density: Option<QuantityFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GravityFile {
    direction: Option<[f64; 3]>,
    magnitude: Option<f64>,
    unit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuantityFile {
    value: f64,
    unit: Option<String>,
}

fn input(value: f64, unit: Option<&str>) -> Result<PropertyInput> {
    match unit {
        None => Ok(PropertyInput::from(value)),
        Some(symbol) => {
            let unit: Unit = units::lookup(symbol)
                .ok_or_else(|| StrataError::Config(format!("unknown unit '{symbol}'")))?;
            Ok(PropertyInput::from((value, unit)))
        }
    }
}

impl TryFrom<SettingsFile> for Settings {
    type Error = StrataError;

    fn try_from(file: SettingsFile) -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(name) = &file.units {
            settings = settings.with_units(UnitSystem::from_name(name)?);
        }
        if let Some(gravity) = file.gravity {
            if let Some(direction) = gravity.direction {
                settings = settings.with_gravity_direction(direction)?;
            }
            if let Some(magnitude) = gravity.magnitude {
                settings =
                    settings.with_gravity_magnitude(input(magnitude, gravity.unit.as_deref())?)?;
            }
        }
        if let Some(density) = file.water_density {
            settings =
                settings.with_water_density(input(density.value, density.unit.as_deref())?)?;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strata_units::UnitError;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.units().name(), "SI");
        assert_eq!(settings.gravity_direction(), Vector::new(0.0, 0.0, -1.0));
        assert_eq!(settings.gravity().value(), Some(9.81));
        assert_eq!(settings.water_density().value(), Some(1000.0));
        assert_relative_eq!(settings.gravity_vector(), Vector::new(0.0, 0.0, -9.81));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_toml_cgs() {
        let settings = Settings::from_toml_str(
            r#"
            units = "cgs"

            [gravity]
            direction = [0.0, 0.0, -2.0]
            magnitude = 981.0

            [water_density]
            value = 1.0
            unit = "g/cm^3"
            "#,
        )
        .unwrap();
        assert_eq!(settings.units().name(), "CGS");
        assert_eq!(settings.gravity_direction(), Vector::new(0.0, 0.0, -1.0));
        // bare magnitude takes the CGS acceleration unit
        let si = UnitSystem::si().convert(settings.gravity());
        assert_relative_eq!(si.value().unwrap(), 9.81, max_relative = 1e-12);
        assert_eq!(settings.water_density().unit, units::GRAM_PER_CUBIC_CENTIMETER);
        assert_relative_eq!(
            settings.gravity_vector(),
            Vector::new(0.0, 0.0, -981.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            Settings::from_toml_str(r#"units = "imperial""#),
            Err(StrataError::Config(_))
        ));
        assert!(Settings::from_toml_str("[water_density]\nvalue = 1.0\nunit = \"furlong\"").is_err());
        assert!(Settings::from_toml_str("gravity_strength = 3.0").is_err());
    }

    #[test]
    fn test_setters_validate() {
        let settings = Settings::default();
        assert!(matches!(
            settings.clone().with_gravity_magnitude((9.81, units::METER)),
            Err(StrataError::Unit(UnitError::DimensionMismatch { .. }))
        ));
        assert!(matches!(
            settings.clone().with_water_density(-1.0),
            Err(StrataError::Unit(UnitError::RangeViolation { .. }))
        ));
        assert!(settings.clone().with_gravity_direction([0.0, 0.0, 0.0]).is_err());
        assert!(settings.with_water_density(vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_setters_return_new_values() {
        let base = Settings::default();
        let moon = base
            .clone()
            .with_gravity_magnitude((1.62, units::METER_PER_SECOND_SQUARED))
            .unwrap();
        assert_eq!(base.gravity().value(), Some(9.81));
        assert_eq!(moon.gravity().value(), Some(1.62));

        let us = base.with_units(UnitSystem::us());
        let ft_s2 = us.gravity_vector().magnitude();
        assert_relative_eq!(ft_s2, 9.81 / 0.3048, max_relative = 1e-12);
    }
}
