//! Unit systems: one unit per base quantity plus derived overrides.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitError};
use crate::{units, BaseQuantity, Dimension, Magnitude, Quantity, Unit};

/// A coherent set of units.
///
/// Any [`Dimension`] resolves to a unit: dimensionless maps to the pure
/// number, a registered derived override wins next, and everything else is
/// synthesized from the base units raised to the dimension's exponents.
///
/// Deserialized systems go through [`UnitSystem::new`], so base units are
/// checked the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UnitSystemFile")]
pub struct UnitSystem {
    name: String,
    length: Unit,
    mass: Unit,
    time: Unit,
    angle: Unit,
    #[serde(default)]
    derived: Vec<Unit>,
}

impl UnitSystem {
    /// Create a system from four base units.
    ///
    /// Each unit must carry exactly its base dimension.
    pub fn new(
        name: impl Into<String>,
        length: Unit,
        mass: Unit,
        time: Unit,
        angle: Unit,
    ) -> Result<Self> {
        for (role, unit) in [
            (BaseQuantity::Length, &length),
            (BaseQuantity::Mass, &mass),
            (BaseQuantity::Time, &time),
            (BaseQuantity::Angle, &angle),
        ] {
            if unit.dimension() != base_dimension(role) {
                return Err(UnitError::InvalidBaseUnit {
                    role,
                    unit: unit.symbol().to_string(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            length,
            mass,
            time,
            angle,
            derived: Vec::new(),
        })
    }

    /// Register `unit` as the preferred unit for its dimension.
    ///
    /// Replaces any earlier override of the same dimension. Overrides for
    /// dimensionless units are ignored.
    #[must_use]
    pub fn with_derived(mut self, unit: Unit) -> Self {
        if unit.is_dimensionless() {
            return self;
        }
        self.derived.retain(|u| u.dimension() != unit.dimension());
        self.derived.push(unit);
        self
    }

    /// International System (m, kg, s) with degrees for angles.
    pub fn si() -> Self {
        Self::builtin("SI", units::METER, units::KILOGRAM, units::SECOND)
            .with_derived(units::NEWTON)
            .with_derived(units::PASCAL)
            .with_derived(units::JOULE)
            .with_derived(units::WATT)
            .with_derived(units::KILOGRAM_PER_CUBIC_METER)
    }

    /// Metre-kilogram-second; identical units to [`UnitSystem::si`].
    pub fn mks() -> Self {
        Self {
            name: "MKS".to_string(),
            ..Self::si()
        }
    }

    /// Centimetre-gram-second.
    pub fn cgs() -> Self {
        Self::builtin("CGS", units::CENTIMETER, units::GRAM, units::SECOND)
            .with_derived(units::DYNE)
            .with_derived(units::BARYE)
            .with_derived(units::ERG)
            .with_derived(units::GRAM_PER_CUBIC_CENTIMETER)
    }

    /// US customary engineering units (ft, slug, s).
    pub fn us() -> Self {
        Self::builtin("US", units::FOOT, units::SLUG, units::SECOND)
            .with_derived(units::POUND_FORCE)
    }

    /// Look up a built-in system by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "SI" => Ok(Self::si()),
            "MKS" => Ok(Self::mks()),
            "CGS" => Ok(Self::cgs()),
            "US" => Ok(Self::us()),
            _ => Err(UnitError::UnknownSystem(name.to_string())),
        }
    }

    fn builtin(name: &str, length: Unit, mass: Unit, time: Unit) -> Self {
        Self {
            name: name.to_string(),
            length,
            mass,
            time,
            angle: units::DEGREE,
            derived: Vec::new(),
        }
    }

    /// System name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base unit for one base quantity.
    pub fn base(&self, base: BaseQuantity) -> &Unit {
        match base {
            BaseQuantity::Length => &self.length,
            BaseQuantity::Mass => &self.mass,
            BaseQuantity::Time => &self.time,
            BaseQuantity::Angle => &self.angle,
        }
    }

    /// Registered derived overrides.
    pub fn derived(&self) -> &[Unit] {
        &self.derived
    }

    /// Preferred unit for `dimension`.
    pub fn unit_for(&self, dimension: &Dimension) -> Unit {
        if dimension.is_dimensionless() {
            return Unit::dimensionless();
        }
        if let Some(unit) = self.derived.iter().find(|u| u.dimension() == *dimension) {
            return unit.clone();
        }
        self.synthesize(dimension)
    }

    fn synthesize(&self, dimension: &Dimension) -> Unit {
        let mut factor = 1.0;
        let mut numerator = Vec::new();
        let mut denominator = Vec::new();
        for base in BaseQuantity::ALL {
            let exp = dimension.exponent(base);
            if exp == 0 {
                continue;
            }
            let unit = self.base(base);
            factor *= unit.factor().powi(i32::from(exp));
            let part = |e: i8| match e {
                1 => unit.symbol().to_string(),
                _ => format!("{}^{}", unit.symbol(), e),
            };
            if exp > 0 {
                numerator.push(part(exp));
            } else {
                denominator.push(part(-exp));
            }
        }
        let symbol = match (numerator.is_empty(), denominator.is_empty()) {
            (_, true) => numerator.join("*"),
            (true, false) => {
                // no numerator: keep negative exponents rather than "1/..."
                let mut parts = Vec::new();
                for base in BaseQuantity::ALL {
                    let exp = dimension.exponent(base);
                    if exp != 0 {
                        parts.push(format!("{}^{}", self.base(base).symbol(), exp));
                    }
                }
                parts.join("*")
            }
            (false, false) => format!("{}/{}", numerator.join("*"), denominator.join("/")),
        };
        Unit::new(symbol, factor, *dimension)
    }

    /// Express `quantity` in this system's preferred unit.
    ///
    /// Dimensionless quantities pass through unchanged. Converting an
    /// already-converted quantity returns it unchanged.
    pub fn convert(&self, quantity: &Quantity) -> Quantity {
        if quantity.unit.is_dimensionless() {
            return quantity.clone();
        }
        let target = self.unit_for(&quantity.dimension());
        let factor = quantity.unit.factor() / target.factor();
        let magnitude: Magnitude = if factor == 1.0 {
            quantity.magnitude.clone()
        } else {
            quantity.magnitude.map(|v| v * factor)
        };
        Quantity {
            magnitude,
            unit: target,
        }
    }

    /// Length unit.
    pub fn length(&self) -> &Unit {
        &self.length
    }

    /// Mass unit.
    pub fn mass(&self) -> &Unit {
        &self.mass
    }

    /// Time unit.
    pub fn time(&self) -> &Unit {
        &self.time
    }

    /// Angle unit.
    pub fn angle(&self) -> &Unit {
        &self.angle
    }

    /// Force unit.
    pub fn force(&self) -> Unit {
        self.unit_for(&Dimension::force())
    }

    /// Pressure (and stress, modulus) unit.
    pub fn pressure(&self) -> Unit {
        self.unit_for(&Dimension::pressure())
    }

    /// Velocity unit.
    pub fn velocity(&self) -> Unit {
        self.unit_for(&Dimension::velocity())
    }

    /// Acceleration unit.
    pub fn acceleration(&self) -> Unit {
        self.unit_for(&Dimension::acceleration())
    }

    /// Density unit.
    pub fn density(&self) -> Unit {
        self.unit_for(&Dimension::density())
    }

    /// Energy unit.
    pub fn energy(&self) -> Unit {
        self.unit_for(&Dimension::energy())
    }

    /// Power unit.
    pub fn power(&self) -> Unit {
        self.unit_for(&Dimension::power())
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::si()
    }
}

fn base_dimension(base: BaseQuantity) -> Dimension {
    match base {
        BaseQuantity::Length => Dimension::length(),
        BaseQuantity::Mass => Dimension::mass(),
        BaseQuantity::Time => Dimension::time(),
        BaseQuantity::Angle => Dimension::angle(),
    }
}

#[derive(Deserialize)]
struct UnitSystemFile {
    name: String,
    length: Unit,
    mass: Unit,
    time: Unit,
    angle: Unit,
    #[serde(default)]
    derived: Vec<Unit>,
}

impl TryFrom<UnitSystemFile> for UnitSystem {
    type Error = UnitError;

    fn try_from(file: UnitSystemFile) -> Result<Self> {
        let system = UnitSystem::new(file.name, file.length, file.mass, file.time, file.angle)?;
        Ok(file.derived.into_iter().fold(system, UnitSystem::with_derived))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_wrong_base_dimension() {
        let err = UnitSystem::new(
            "broken",
            units::METER,
            units::SECOND,
            units::SECOND,
            units::RADIAN,
        )
        .unwrap_err();
        assert_eq!(
            err,
            UnitError::InvalidBaseUnit {
                role: BaseQuantity::Mass,
                unit: "s".to_string(),
            }
        );
    }

    #[test]
    fn test_derived_override_wins() {
        let si = UnitSystem::si();
        assert_eq!(si.force().symbol(), "N");
        assert_eq!(si.pressure().symbol(), "Pa");
        assert_eq!(UnitSystem::cgs().force().symbol(), "dyn");
    }

    #[test]
    fn test_synthesized_units() {
        let si = UnitSystem::si();
        let velocity = si.velocity();
        assert_eq!(velocity.symbol(), "m/s");
        assert_eq!(velocity, units::METER_PER_SECOND);
        assert_eq!(si.acceleration().symbol(), "m/s^2");

        let frequency = si.unit_for(&Dimension::time().powi(-1));
        assert_eq!(frequency.symbol(), "s^-1");
        assert_relative_eq!(frequency.factor(), 1.0);
    }

    #[test]
    fn test_us_synthesized_pressure() {
        let us = UnitSystem::us();
        let pressure = us.pressure();
        assert_eq!(pressure.symbol(), "slug/ft/s^2");
        // lbf/ft^2
        let expected = units::POUND_FORCE.factor() / units::FOOT.factor().powi(2);
        assert_relative_eq!(pressure.factor(), expected, max_relative = 1e-9);
        assert_eq!(us.force(), units::POUND_FORCE);
    }

    #[test]
    fn test_force_matches_hand_built() {
        let si = UnitSystem::si();
        let hand_built = &(&units::KILOGRAM * &units::METER) / &units::SECOND.powi(2);
        assert_eq!(si.force(), hand_built);
        assert_eq!(si.unit_for(&Dimension::new(1, 1, -2, 0)), si.force());
    }

    #[test]
    fn test_convert_to_system_units() {
        let si = UnitSystem::si();
        let q = Quantity::new(1.2, units::GRAM_PER_CUBIC_CENTIMETER);
        let converted = si.convert(&q);
        assert_eq!(converted.unit, units::KILOGRAM_PER_CUBIC_METER);
        assert_relative_eq!(converted.value().unwrap(), 1200.0, max_relative = 1e-12);

        let cgs = UnitSystem::cgs();
        let back = cgs.convert(&converted);
        assert_relative_eq!(back.value().unwrap(), 1.2, max_relative = 1e-12);
    }

    #[test]
    fn test_convert_is_idempotent() {
        for system in [
            UnitSystem::si(),
            UnitSystem::cgs(),
            UnitSystem::us(),
        ] {
            for q in [
                Quantity::new(2700.0, units::KILOGRAM_PER_CUBIC_METER),
                Quantity::new(vec![1.0, 2.5], units::MEGAPASCAL),
                Quantity::new(std::f64::consts::FRAC_PI_4, units::RADIAN),
                Quantity::new(3.0, units::KILOMETER),
            ] {
                let once = system.convert(&q);
                let twice = system.convert(&once);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_convert_dimensionless_passthrough() {
        let q = Quantity::new(0.25, Unit::dimensionless());
        assert_eq!(UnitSystem::us().convert(&q), q);
    }

    #[test]
    fn test_angles_resolve_to_degrees() {
        let si = UnitSystem::si();
        let q = si.convert(&Quantity::new(std::f64::consts::PI, units::RADIAN));
        assert_eq!(q.unit, units::DEGREE);
        assert_relative_eq!(q.value().unwrap(), 180.0, max_relative = 1e-12);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(UnitSystem::from_name("si").unwrap(), UnitSystem::si());
        assert_eq!(UnitSystem::from_name("Cgs").unwrap().name(), "CGS");
        assert_eq!(UnitSystem::from_name("MKS").unwrap().length(), &units::METER);
        assert!(matches!(
            UnitSystem::from_name("imperial"),
            Err(UnitError::UnknownSystem(_))
        ));
    }

    #[test]
    fn test_with_derived_replaces_override() {
        let system = UnitSystem::si().with_derived(units::MEGAPASCAL);
        assert_eq!(system.pressure(), units::MEGAPASCAL);
        assert_eq!(
            system
                .derived()
                .iter()
                .filter(|u| u.dimension() == Dimension::pressure())
                .count(),
            1
        );
    }

    fn system_toml(length: &str) -> String {
        format!(
            r#"
            name = "custom"
            length = {length}
            mass = {{ symbol = "kg", factor = 1.0, dimension = {{ length = 0, mass = 1, time = 0, angle = 0 }} }}
            time = {{ symbol = "s", factor = 1.0, dimension = {{ length = 0, mass = 0, time = 1, angle = 0 }} }}
            angle = {{ symbol = "rad", factor = 1.0, dimension = {{ length = 0, mass = 0, time = 0, angle = 1 }} }}
            derived = [
                {{ symbol = "kN", factor = 1000.0, dimension = {{ length = 1, mass = 1, time = -2, angle = 0 }} }},
            ]
            "#
        )
    }

    #[test]
    fn test_deserialize_validates_base_units() {
        let km = r#"{ symbol = "km", factor = 1000.0, dimension = { length = 1, mass = 0, time = 0, angle = 0 } }"#;
        let system: UnitSystem = toml::from_str(&system_toml(km)).unwrap();
        assert_eq!(system.length(), &units::KILOMETER);
        assert_eq!(system.force().symbol(), "kN");

        let seconds = r#"{ symbol = "s", factor = 1.0, dimension = { length = 0, mass = 0, time = 1, angle = 0 } }"#;
        let err = toml::from_str::<UnitSystem>(&system_toml(seconds)).unwrap_err();
        assert!(err.message().contains("length base unit"), "{err}");
    }
}
