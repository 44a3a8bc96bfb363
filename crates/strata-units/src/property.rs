//! Named, dimensioned, range-checked physical properties.

use std::fmt;

use crate::error::{Result, UnitError};
use crate::{kinds, Dimension, Magnitude, Quantity, Unit, UnitSystem};

/// Declaration of a physical property.
///
/// `min` and `max` are expressed in `limit_unit`. When `allowed_units` is
/// set, values must carry one of those units even if another unit of the
/// same dimension would convert.
#[derive(Debug, PartialEq)]
pub struct PropertyKind {
    /// Catalogue name (snake_case).
    pub name: &'static str,
    /// Required dimension.
    pub dimension: Dimension,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Unit of `min` and `max`.
    pub limit_unit: Unit,
    /// Optional unit allow-list.
    pub allowed_units: Option<&'static [Unit]>,
}

impl PropertyKind {
    /// Find a catalogued kind by name, ignoring ASCII case.
    pub fn lookup(name: &str) -> Option<&'static PropertyKind> {
        kinds::catalogue()
            .iter()
            .copied()
            .find(|kind| kind.name.eq_ignore_ascii_case(name))
    }

    /// Validate `value` into a [`Property`] of this kind.
    pub fn with_value(
        &'static self,
        value: impl Into<PropertyInput>,
        system: &UnitSystem,
    ) -> Result<Property> {
        Property::new(self, value, system)
    }

    fn check_range(&self, quantity: &Quantity) -> Result<()> {
        let factor = self.limit_unit.conversion_factor(&quantity.unit)?;
        let (min, max) = (self.min * factor, self.max * factor);
        for &value in quantity.magnitude.values() {
            // NaN fails both comparisons
            if !(min <= value && value <= max) {
                return Err(UnitError::RangeViolation {
                    property: self.name,
                    value,
                    min,
                    max,
                    unit: quantity.unit.symbol().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Anything a property value can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyInput {
    /// Numbers without a unit; the active system's unit is attached.
    Bare(Magnitude),
    /// Numbers with an explicit unit.
    Quantity(Quantity),
    /// No value supplied.
    Missing,
}

impl From<f64> for PropertyInput {
    fn from(v: f64) -> Self {
        PropertyInput::Bare(Magnitude::Scalar(v))
    }
}

impl From<Vec<f64>> for PropertyInput {
    fn from(values: Vec<f64>) -> Self {
        PropertyInput::Bare(Magnitude::Array(values))
    }
}

impl From<&[f64]> for PropertyInput {
    fn from(values: &[f64]) -> Self {
        PropertyInput::Bare(Magnitude::from(values))
    }
}

impl From<Magnitude> for PropertyInput {
    fn from(magnitude: Magnitude) -> Self {
        PropertyInput::Bare(magnitude)
    }
}

impl From<Quantity> for PropertyInput {
    fn from(quantity: Quantity) -> Self {
        PropertyInput::Quantity(quantity)
    }
}

impl From<(f64, Unit)> for PropertyInput {
    fn from((value, unit): (f64, Unit)) -> Self {
        PropertyInput::Quantity(Quantity::new(value, unit))
    }
}

impl From<(Vec<f64>, Unit)> for PropertyInput {
    fn from((values, unit): (Vec<f64>, Unit)) -> Self {
        PropertyInput::Quantity(Quantity::new(values, unit))
    }
}

impl From<Property> for PropertyInput {
    fn from(property: Property) -> Self {
        PropertyInput::Quantity(property.quantity)
    }
}

impl From<&Property> for PropertyInput {
    fn from(property: &Property) -> Self {
        PropertyInput::Quantity(property.quantity.clone())
    }
}

impl<T: Into<PropertyInput>> From<Option<T>> for PropertyInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyInput::Missing, Into::into)
    }
}

/// A validated property value.
///
/// The quantity is kept in the unit it was supplied in; use
/// [`Property::in_system`] for the system's preferred unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    kind: &'static PropertyKind,
    quantity: Quantity,
}

impl Property {
    /// Validate `value` against `kind`.
    ///
    /// Bare numbers take `system`'s unit for the kind's dimension. The
    /// unit's dimension, the allow-list, then the range are checked in
    /// that order.
    pub fn new(
        kind: &'static PropertyKind,
        value: impl Into<PropertyInput>,
        system: &UnitSystem,
    ) -> Result<Self> {
        let quantity = match value.into() {
            PropertyInput::Bare(magnitude) => {
                Quantity::new(magnitude, system.unit_for(&kind.dimension))
            }
            PropertyInput::Quantity(quantity) => quantity,
            PropertyInput::Missing => return Err(UnitError::MissingValue(kind.name)),
        };
        if quantity.magnitude.is_empty() {
            return Err(UnitError::MissingValue(kind.name));
        }
        if quantity.dimension() != kind.dimension {
            return Err(UnitError::DimensionMismatch {
                expected: kind.dimension,
                found: quantity.dimension(),
            });
        }
        if let Some(allowed) = kind.allowed_units {
            if !allowed.contains(&quantity.unit) {
                return Err(UnitError::DisallowedUnit {
                    property: kind.name,
                    unit: quantity.unit.symbol().to_string(),
                });
            }
        }
        kind.check_range(&quantity)?;
        Ok(Self { kind, quantity })
    }

    /// Replace the value, re-running every check.
    pub fn with_value(
        &self,
        value: impl Into<PropertyInput>,
        system: &UnitSystem,
    ) -> Result<Self> {
        Self::new(self.kind, value, system)
    }

    /// Declaration this value satisfies.
    pub fn kind(&self) -> &'static PropertyKind {
        self.kind
    }

    /// Property name.
    pub fn name(&self) -> &'static str {
        self.kind.name
    }

    /// The stored quantity, in its supplied unit.
    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    /// Scalar value in the stored unit.
    pub fn value(&self) -> Option<f64> {
        self.quantity.value()
    }

    /// The quantity expressed in `system`'s preferred unit.
    pub fn in_system(&self, system: &UnitSystem) -> Quantity {
        system.convert(&self.quantity)
    }

    /// The quantity expressed in `unit`.
    pub fn to(&self, unit: &Unit) -> Result<Quantity> {
        self.quantity.to(unit)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.kind.name, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kinds, units};
    use approx::assert_relative_eq;

    #[test]
    fn test_friction_angle_range() {
        let si = UnitSystem::si();
        assert!(Property::new(&kinds::FRICTION_ANGLE, (30.0, units::DEGREE), &si).is_ok());
        let err = Property::new(&kinds::FRICTION_ANGLE, (95.0, units::DEGREE), &si).unwrap_err();
        assert!(matches!(
            err,
            UnitError::RangeViolation { property: "friction_angle", value, .. } if value == 95.0
        ));
    }

    #[test]
    fn test_bare_value_takes_system_unit() {
        let density = Property::new(&kinds::DENSITY, 2700.0, &UnitSystem::si()).unwrap();
        assert_eq!(density.quantity().unit, units::KILOGRAM_PER_CUBIC_METER);

        let density = Property::new(&kinds::DENSITY, 2.7, &UnitSystem::cgs()).unwrap();
        assert_eq!(density.quantity().unit, units::GRAM_PER_CUBIC_CENTIMETER);
        let si = density.in_system(&UnitSystem::si());
        assert_relative_eq!(si.value().unwrap(), 2700.0, max_relative = 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Property::new(&kinds::COHESION, (3.0, units::METER), &UnitSystem::si())
            .unwrap_err();
        assert_eq!(
            err,
            UnitError::DimensionMismatch {
                expected: Dimension::pressure(),
                found: Dimension::length(),
            }
        );
    }

    #[test]
    fn test_allow_list() {
        let si = UnitSystem::si();
        let rad = Property::new(&kinds::DILATION_ANGLE, (0.1, units::RADIAN), &si);
        assert!(rad.is_ok());

        let gradian = Unit::new("gon", std::f64::consts::PI / 200.0, Dimension::angle());
        let err = Property::new(&kinds::DILATION_ANGLE, (10.0, gradian), &si).unwrap_err();
        assert!(matches!(err, UnitError::DisallowedUnit { unit, .. } if unit == "gon"));
    }

    #[test]
    fn test_range_bounds_convert_to_value_unit() {
        let si = UnitSystem::si();
        assert!(Property::new(&kinds::FRICTION_ANGLE, (1.5, units::RADIAN), &si).is_ok());
        let err = Property::new(&kinds::FRICTION_ANGLE, (1.6, units::RADIAN), &si).unwrap_err();
        match err {
            UnitError::RangeViolation { max, unit, .. } => {
                assert_relative_eq!(max, std::f64::consts::FRAC_PI_2);
                assert_eq!(unit, "rad");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_array_values_all_checked() {
        let si = UnitSystem::si();
        assert!(Property::new(&kinds::POISSONS_RATIO, vec![0.1, 0.25, 0.5], &si).is_ok());
        let err = Property::new(&kinds::POISSONS_RATIO, vec![0.1, 0.6, 0.2], &si).unwrap_err();
        assert!(matches!(err, UnitError::RangeViolation { value, .. } if value == 0.6));
    }

    #[test]
    fn test_nan_and_missing_fail() {
        let si = UnitSystem::si();
        assert!(matches!(
            Property::new(&kinds::DENSITY, f64::NAN, &si),
            Err(UnitError::RangeViolation { .. })
        ));
        assert_eq!(
            Property::new(&kinds::DENSITY, Option::<f64>::None, &si),
            Err(UnitError::MissingValue("density"))
        );
        assert_eq!(
            Property::new(&kinds::DENSITY, Vec::<f64>::new(), &si),
            Err(UnitError::MissingValue("density"))
        );
    }

    #[test]
    fn test_property_unwraps_to_quantity() {
        let si = UnitSystem::si();
        let dip = Property::new(&kinds::DIP, 45.0, &si).unwrap();
        // a dip is a valid friction angle value too
        let phi = Property::new(&kinds::FRICTION_ANGLE, &dip, &si).unwrap();
        assert_eq!(phi.quantity(), dip.quantity());
        assert_eq!(phi.name(), "friction_angle");
    }

    #[test]
    fn test_with_value_revalidates() {
        let si = UnitSystem::si();
        let e = Property::new(&kinds::YOUNGS_MODULUS, (30.0, units::GIGAPASCAL), &si).unwrap();
        let updated = e.with_value((45.0, units::GIGAPASCAL), &si).unwrap();
        assert_eq!(updated.value(), Some(45.0));
        assert!(e.with_value(-1.0, &si).is_err());
        assert_relative_eq!(updated.to(&units::PASCAL).unwrap().value().unwrap(), 45e9);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(PropertyKind::lookup("density"), Some(&kinds::DENSITY));
        assert_eq!(PropertyKind::lookup("Friction_Angle"), Some(&kinds::FRICTION_ANGLE));
        assert!(PropertyKind::lookup("porosity").is_none());
    }

    #[test]
    fn test_display() {
        let p = Property::new(&kinds::DENSITY, 2700.0, &UnitSystem::si()).unwrap();
        assert_eq!(p.to_string(), "density = 2700 kg/m^3");
    }
}
