//! The property catalogue.
//!
//! Every entry is data over [`PropertyKind`]; validation is shared.

use crate::{units, Dimension, PropertyKind, Unit};

static ANGLE_UNITS: [Unit; 2] = [units::DEGREE, units::RADIAN];

const fn non_negative(name: &'static str, dimension: Dimension, limit_unit: Unit) -> PropertyKind {
    PropertyKind {
        name,
        dimension,
        min: 0.0,
        max: f64::INFINITY,
        limit_unit,
        allowed_units: None,
    }
}

const fn azimuth(name: &'static str) -> PropertyKind {
    PropertyKind {
        name,
        dimension: Dimension::angle(),
        min: 0.0,
        max: 360.0,
        limit_unit: units::DEGREE,
        allowed_units: None,
    }
}

/// Bulk density.
pub static DENSITY: PropertyKind =
    non_negative("density", Dimension::density(), units::KILOGRAM_PER_CUBIC_METER);

/// Bulk modulus K.
pub static BULK_MODULUS: PropertyKind =
    non_negative("bulk_modulus", Dimension::pressure(), units::PASCAL);

/// Shear modulus G.
pub static SHEAR_MODULUS: PropertyKind =
    non_negative("shear_modulus", Dimension::pressure(), units::PASCAL);

/// Young's modulus E.
pub static YOUNGS_MODULUS: PropertyKind =
    non_negative("youngs_modulus", Dimension::pressure(), units::PASCAL);

/// Poisson's ratio ν. Bounded by thermodynamic stability.
pub static POISSONS_RATIO: PropertyKind = PropertyKind {
    name: "poissons_ratio",
    dimension: Dimension::dimensionless(),
    min: -1.0,
    max: 0.5,
    limit_unit: units::DIMENSIONLESS,
    allowed_units: None,
};

/// Mohr-Coulomb friction angle φ.
pub static FRICTION_ANGLE: PropertyKind = PropertyKind {
    name: "friction_angle",
    dimension: Dimension::angle(),
    min: 0.0,
    max: 90.0,
    limit_unit: units::DEGREE,
    allowed_units: Some(&ANGLE_UNITS),
};

/// Dilation angle ψ.
pub static DILATION_ANGLE: PropertyKind = PropertyKind {
    name: "dilation_angle",
    dimension: Dimension::angle(),
    min: 0.0,
    max: 90.0,
    limit_unit: units::DEGREE,
    allowed_units: Some(&ANGLE_UNITS),
};

/// Cohesion c.
pub static COHESION: PropertyKind =
    non_negative("cohesion", Dimension::pressure(), units::PASCAL);

/// Tensile strength.
pub static TENSILE_STRENGTH: PropertyKind =
    non_negative("tensile_strength", Dimension::pressure(), units::PASCAL);

/// Uniaxial compressive strength (UCS).
pub static UNIAXIAL_COMPRESSIVE_STRENGTH: PropertyKind = non_negative(
    "uniaxial_compressive_strength",
    Dimension::pressure(),
    units::PASCAL,
);

/// Strike azimuth.
pub static STRIKE: PropertyKind = azimuth("strike");

/// Dip-direction azimuth.
pub static DIP_DIRECTION: PropertyKind = azimuth("dip_direction");

/// Trend azimuth.
pub static TREND: PropertyKind = azimuth("trend");

/// Dip below horizontal.
pub static DIP: PropertyKind = PropertyKind {
    name: "dip",
    dimension: Dimension::angle(),
    min: 0.0,
    max: 90.0,
    limit_unit: units::DEGREE,
    allowed_units: None,
};

/// Plunge; positive downward.
pub static PLUNGE: PropertyKind = PropertyKind {
    name: "plunge",
    dimension: Dimension::angle(),
    min: -90.0,
    max: 90.0,
    limit_unit: units::DEGREE,
    allowed_units: None,
};

static CATALOGUE: [&PropertyKind; 15] = [
    &DENSITY,
    &BULK_MODULUS,
    &SHEAR_MODULUS,
    &YOUNGS_MODULUS,
    &POISSONS_RATIO,
    &FRICTION_ANGLE,
    &DILATION_ANGLE,
    &COHESION,
    &TENSILE_STRENGTH,
    &UNIAXIAL_COMPRESSIVE_STRENGTH,
    &STRIKE,
    &DIP_DIRECTION,
    &TREND,
    &DIP,
    &PLUNGE,
];

/// Every catalogued kind.
pub fn catalogue() -> &'static [&'static PropertyKind] {
    &CATALOGUE
}
