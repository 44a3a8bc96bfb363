//! Catalogue of concrete units.
//!
//! Factors are relative to the coherent base (m, kg, s, rad).

use std::f64::consts::PI;

use crate::{Dimension, Unit};

/// Pure number.
pub const DIMENSIONLESS: Unit = Unit::dimensionless();

/// Metre.
pub const METER: Unit = Unit::named("m", 1.0, Dimension::length());
/// Centimetre.
pub const CENTIMETER: Unit = Unit::named("cm", 1e-2, Dimension::length());
/// Millimetre.
pub const MILLIMETER: Unit = Unit::named("mm", 1e-3, Dimension::length());
/// Kilometre.
pub const KILOMETER: Unit = Unit::named("km", 1e3, Dimension::length());
/// International foot.
pub const FOOT: Unit = Unit::named("ft", 0.3048, Dimension::length());
/// International inch.
pub const INCH: Unit = Unit::named("in", 0.0254, Dimension::length());

/// Kilogram.
pub const KILOGRAM: Unit = Unit::named("kg", 1.0, Dimension::mass());
/// Gram.
pub const GRAM: Unit = Unit::named("g", 1e-3, Dimension::mass());
/// Metric tonne.
pub const TONNE: Unit = Unit::named("t", 1e3, Dimension::mass());
/// Slug (1 lbf·s²/ft).
pub const SLUG: Unit = Unit::named("slug", 14.593_902_937_206_364, Dimension::mass());
/// Avoirdupois pound.
pub const POUND: Unit = Unit::named("lb", 0.453_592_37, Dimension::mass());

/// Second.
pub const SECOND: Unit = Unit::named("s", 1.0, Dimension::time());
/// Minute.
pub const MINUTE: Unit = Unit::named("min", 60.0, Dimension::time());
/// Hour.
pub const HOUR: Unit = Unit::named("h", 3600.0, Dimension::time());

/// Radian.
pub const RADIAN: Unit = Unit::named("rad", 1.0, Dimension::angle());
/// Degree of arc.
pub const DEGREE: Unit = Unit::named("deg", PI / 180.0, Dimension::angle());

/// Metre per second.
pub const METER_PER_SECOND: Unit = Unit::named("m/s", 1.0, Dimension::velocity());
/// Metre per second squared.
pub const METER_PER_SECOND_SQUARED: Unit = Unit::named("m/s^2", 1.0, Dimension::acceleration());
/// Foot per second squared.
pub const FOOT_PER_SECOND_SQUARED: Unit =
    Unit::named("ft/s^2", 0.3048, Dimension::acceleration());

/// Newton.
pub const NEWTON: Unit = Unit::named("N", 1.0, Dimension::force());
/// Kilonewton.
pub const KILONEWTON: Unit = Unit::named("kN", 1e3, Dimension::force());
/// Dyne.
pub const DYNE: Unit = Unit::named("dyn", 1e-5, Dimension::force());
/// Pound-force.
pub const POUND_FORCE: Unit = Unit::named("lbf", 4.448_221_615_260_5, Dimension::force());

/// Pascal.
pub const PASCAL: Unit = Unit::named("Pa", 1.0, Dimension::pressure());
/// Kilopascal.
pub const KILOPASCAL: Unit = Unit::named("kPa", 1e3, Dimension::pressure());
/// Megapascal.
pub const MEGAPASCAL: Unit = Unit::named("MPa", 1e6, Dimension::pressure());
/// Gigapascal.
pub const GIGAPASCAL: Unit = Unit::named("GPa", 1e9, Dimension::pressure());
/// Bar.
pub const BAR: Unit = Unit::named("bar", 1e5, Dimension::pressure());
/// Barye (dyn/cm²).
pub const BARYE: Unit = Unit::named("Ba", 0.1, Dimension::pressure());
/// Pound-force per square inch.
pub const PSI: Unit = Unit::named("psi", 6_894.757_293_168_361, Dimension::pressure());

/// Joule.
pub const JOULE: Unit = Unit::named("J", 1.0, Dimension::energy());
/// Erg.
pub const ERG: Unit = Unit::named("erg", 1e-7, Dimension::energy());
/// Watt.
pub const WATT: Unit = Unit::named("W", 1.0, Dimension::power());

/// Kilogram per cubic metre.
pub const KILOGRAM_PER_CUBIC_METER: Unit = Unit::named("kg/m^3", 1.0, Dimension::density());
/// Gram per cubic centimetre.
pub const GRAM_PER_CUBIC_CENTIMETER: Unit = Unit::named("g/cm^3", 1e3, Dimension::density());

static CATALOGUE: [Unit; 35] = [
    METER,
    CENTIMETER,
    MILLIMETER,
    KILOMETER,
    FOOT,
    INCH,
    KILOGRAM,
    GRAM,
    TONNE,
    SLUG,
    POUND,
    SECOND,
    MINUTE,
    HOUR,
    RADIAN,
    DEGREE,
    METER_PER_SECOND,
    METER_PER_SECOND_SQUARED,
    FOOT_PER_SECOND_SQUARED,
    NEWTON,
    KILONEWTON,
    DYNE,
    POUND_FORCE,
    PASCAL,
    KILOPASCAL,
    MEGAPASCAL,
    GIGAPASCAL,
    BAR,
    BARYE,
    PSI,
    JOULE,
    ERG,
    WATT,
    KILOGRAM_PER_CUBIC_METER,
    GRAM_PER_CUBIC_CENTIMETER,
];

/// Every catalogued unit.
pub fn catalogue() -> &'static [Unit] {
    &CATALOGUE
}

/// Find a catalogued unit by its exact symbol.
///
/// This is a table lookup, not an expression parser: `"g/cm^3"` resolves,
/// `"g / cm**3"` does not.
pub fn lookup(symbol: &str) -> Option<Unit> {
    CATALOGUE.iter().find(|u| u.symbol() == symbol).cloned()
}
