//! Isotropic linear elasticity.
//!
//! An [`Elastic`] value stores bulk and shear moduli. It can be built from
//! either (K, G) or (E, ν), and Young's modulus and Poisson's ratio are
//! derived on demand:
//!
//! ```text
//! K = E / (3 (1 - 2ν))      G = E / (2 (1 + ν))
//! E = 9KG / (3K + G)        ν = (3K - 2G) / (2 (3K + G))
//! ```

use crate::error::{Result, UnitError};
use crate::{kinds, Magnitude, Property, PropertyInput, Quantity, Unit, UnitSystem};

/// Elastic moduli of an isotropic material.
///
/// Both moduli share the bulk modulus's unit. Scalar and array values mix:
/// a scalar applies to every element of the other modulus.
#[derive(Debug, Clone, PartialEq)]
pub struct Elastic {
    bulk: Property,
    shear: Property,
}

impl Elastic {
    /// Build from bulk modulus K and shear modulus G.
    ///
    /// Bare numbers take `system`'s pressure unit.
    pub fn new(
        bulk: impl Into<PropertyInput>,
        shear: impl Into<PropertyInput>,
        system: &UnitSystem,
    ) -> Result<Self> {
        let bulk = Property::new(&kinds::BULK_MODULUS, bulk, system)?;
        let shear = Property::new(&kinds::SHEAR_MODULUS, shear, system)?;
        let unit = bulk.quantity().unit.clone();
        let shear = Property::new(&kinds::SHEAR_MODULUS, shear.to(&unit)?, system)?;
        check_shapes(&bulk.quantity().magnitude, &shear.quantity().magnitude)?;

        // 3K + G vanishes only when both moduli are zero
        let stiffness = pairwise(
            &bulk.quantity().magnitude,
            &shear.quantity().magnitude,
            |k, g| 3.0 * k + g,
        );
        if let Some(&value) = stiffness.values().iter().find(|&&s| !(s > 0.0)) {
            return Err(UnitError::Singular {
                property: kinds::BULK_MODULUS.name,
                value,
            });
        }
        Ok(Self { bulk, shear })
    }

    /// Build from Young's modulus E and Poisson's ratio ν.
    ///
    /// ν must lie strictly inside `(-1, 0.5)`; at either end one of the
    /// moduli is infinite.
    pub fn from_young_poisson(
        young: impl Into<PropertyInput>,
        poisson: impl Into<PropertyInput>,
        system: &UnitSystem,
    ) -> Result<Self> {
        let young = Property::new(&kinds::YOUNGS_MODULUS, young, system)?;
        let poisson = Property::new(&kinds::POISSONS_RATIO, poisson, system)?;
        let e = &young.quantity().magnitude;
        let nu = &poisson.quantity().magnitude;
        check_shapes(e, nu)?;
        if let Some(&value) = nu.values().iter().find(|&&v| v <= -1.0 || v >= 0.5) {
            return Err(UnitError::Singular {
                property: kinds::POISSONS_RATIO.name,
                value,
            });
        }

        let unit = young.quantity().unit.clone();
        let bulk = pairwise(e, nu, |e, nu| e / (3.0 * (1.0 - 2.0 * nu)));
        let shear = pairwise(e, nu, |e, nu| e / (2.0 * (1.0 + nu)));
        Self::new(
            Quantity::new(bulk, unit.clone()),
            Quantity::new(shear, unit),
            system,
        )
    }

    /// Bulk modulus K.
    pub fn bulk(&self) -> &Property {
        &self.bulk
    }

    /// Shear modulus G, in the bulk modulus's unit.
    pub fn shear(&self) -> &Property {
        &self.shear
    }

    /// Unit both moduli are stored in.
    pub fn unit(&self) -> &Unit {
        &self.bulk.quantity().unit
    }

    /// Young's modulus E, in [`Elastic::unit`].
    pub fn young(&self) -> Quantity {
        let e = pairwise(self.k(), self.g(), |k, g| 9.0 * k * g / (3.0 * k + g));
        Quantity::new(e, self.unit().clone())
    }

    /// Poisson's ratio ν.
    pub fn poisson(&self) -> Quantity {
        let nu = pairwise(self.k(), self.g(), |k, g| {
            (3.0 * k - 2.0 * g) / (2.0 * (3.0 * k + g))
        });
        Quantity::new(nu, Unit::dimensionless())
    }

    /// Replace Young's modulus, keeping Poisson's ratio.
    pub fn with_young(
        &self,
        young: impl Into<PropertyInput>,
        system: &UnitSystem,
    ) -> Result<Self> {
        Self::from_young_poisson(young, self.poisson(), system)
    }

    /// Replace Poisson's ratio, keeping Young's modulus.
    pub fn with_poisson(
        &self,
        poisson: impl Into<PropertyInput>,
        system: &UnitSystem,
    ) -> Result<Self> {
        Self::from_young_poisson(self.young(), poisson, system)
    }

    fn k(&self) -> &Magnitude {
        &self.bulk.quantity().magnitude
    }

    fn g(&self) -> &Magnitude {
        &self.shear.quantity().magnitude
    }
}

fn check_shapes(a: &Magnitude, b: &Magnitude) -> Result<()> {
    match (a, b) {
        (Magnitude::Array(x), Magnitude::Array(y)) if x.len() != y.len() => {
            Err(UnitError::ShapeMismatch {
                left: x.len(),
                right: y.len(),
            })
        }
        _ => Ok(()),
    }
}

/// Elementwise `f`, broadcasting a scalar against an array. Shapes must
/// already have passed [`check_shapes`].
fn pairwise(a: &Magnitude, b: &Magnitude, f: impl Fn(f64, f64) -> f64) -> Magnitude {
    match (a, b) {
        (Magnitude::Scalar(x), Magnitude::Scalar(y)) => Magnitude::Scalar(f(*x, *y)),
        (Magnitude::Scalar(x), Magnitude::Array(_)) => b.map(|y| f(*x, y)),
        (Magnitude::Array(_), Magnitude::Scalar(y)) => a.map(|x| f(x, *y)),
        (Magnitude::Array(x), Magnitude::Array(y)) => {
            Magnitude::Array(x.iter().zip(y).map(|(&x, &y)| f(x, y)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_young_poisson_round_trip() {
        let si = UnitSystem::si();
        let steel = Elastic::from_young_poisson((200.0, units::GIGAPASCAL), 0.25, &si).unwrap();
        assert_eq!(steel.unit(), &units::GIGAPASCAL);
        assert_relative_eq!(steel.bulk().value().unwrap(), 400.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(steel.shear().value().unwrap(), 80.0, max_relative = 1e-12);
        assert_relative_eq!(steel.young().value().unwrap(), 200.0, max_relative = 1e-12);
        assert_relative_eq!(steel.poisson().value().unwrap(), 0.25, max_relative = 1e-12);
    }

    #[test]
    fn test_from_bulk_shear_round_trip() {
        let si = UnitSystem::si();
        let rock = Elastic::new((10.0, units::GIGAPASCAL), (6000.0, units::MEGAPASCAL), &si)
            .unwrap();
        // shear is stored in the bulk unit
        assert_eq!(rock.shear().quantity().unit, units::GIGAPASCAL);
        assert_relative_eq!(rock.shear().value().unwrap(), 6.0, max_relative = 1e-12);

        let e = rock.young().value().unwrap();
        let nu = rock.poisson().value().unwrap();
        assert_relative_eq!(e, 9.0 * 10.0 * 6.0 / 36.0, max_relative = 1e-12);
        assert_relative_eq!(nu, 18.0 / 72.0, max_relative = 1e-12);

        let again = Elastic::from_young_poisson((e, units::GIGAPASCAL), nu, &si).unwrap();
        assert_relative_eq!(again.bulk().value().unwrap(), 10.0, max_relative = 1e-12);
        assert_relative_eq!(again.shear().value().unwrap(), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_bare_values_use_system_pressure() {
        let elastic = Elastic::new(3.0e9, 1.0e9, &UnitSystem::si()).unwrap();
        assert_eq!(elastic.unit(), &units::PASCAL);
    }

    #[test]
    fn test_setters_keep_the_other_parameter() {
        let si = UnitSystem::si();
        let base = Elastic::from_young_poisson((50.0, units::GIGAPASCAL), 0.2, &si).unwrap();

        let stiffer = base.with_young((100.0, units::GIGAPASCAL), &si).unwrap();
        assert_relative_eq!(stiffer.young().value().unwrap(), 100.0, max_relative = 1e-12);
        assert_relative_eq!(stiffer.poisson().value().unwrap(), 0.2, max_relative = 1e-12);

        let softer = base.with_poisson(0.3, &si).unwrap();
        assert_relative_eq!(softer.young().value().unwrap(), 50.0, max_relative = 1e-12);
        assert_relative_eq!(softer.poisson().value().unwrap(), 0.3, max_relative = 1e-12);
        assert_relative_eq!(base.poisson().value().unwrap(), 0.2, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_parameters() {
        let si = UnitSystem::si();
        assert!(matches!(
            Elastic::from_young_poisson(1.0e9, 0.5, &si),
            Err(UnitError::Singular { .. })
        ));
        assert!(matches!(
            Elastic::from_young_poisson(1.0e9, 0.7, &si),
            Err(UnitError::RangeViolation { .. })
        ));
        assert!(matches!(
            Elastic::from_young_poisson((1.0, units::METER), 0.25, &si),
            Err(UnitError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            Elastic::new(-1.0, 1.0, &si),
            Err(UnitError::RangeViolation { .. })
        ));
        assert!(matches!(
            Elastic::new(0.0, 0.0, &si),
            Err(UnitError::Singular { .. })
        ));
    }

    #[test]
    fn test_array_moduli() {
        let si = UnitSystem::si();
        let layered = Elastic::new(
            (vec![10.0, 20.0], units::GIGAPASCAL),
            (6.0, units::GIGAPASCAL),
            &si,
        )
        .unwrap();
        let nu = layered.poisson();
        assert_eq!(nu.magnitude.len(), 2);
        assert_relative_eq!(nu.magnitude.values()[0], 0.25, max_relative = 1e-12);

        let err = Elastic::new(
            (vec![10.0, 20.0], units::GIGAPASCAL),
            (vec![1.0, 2.0, 3.0], units::GIGAPASCAL),
            &si,
        )
        .unwrap_err();
        assert_eq!(err, UnitError::ShapeMismatch { left: 2, right: 3 });
    }
}
