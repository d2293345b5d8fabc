//! Unit conversion for stored variables
//!
//! Every value is converted to SI on read. A variable without units is taken
//! to be in SI already.

use crate::error::{LoadsError, LoadsResult};

/// Physical quantity expected for a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Dimensionless,
    Length,
    Mass,
    Force,
    Moment,
    Velocity,
    Density,
    ForcePerLength,
    MassPerLength,
}

impl Quantity {
    /// SI unit string written alongside values of this quantity
    pub fn si_unit(self) -> Option<&'static str> {
        match self {
            Quantity::Dimensionless => None,
            Quantity::Length => Some("m"),
            Quantity::Mass => Some("kg"),
            Quantity::Force => Some("N"),
            Quantity::Moment => Some("N*m"),
            Quantity::Velocity => Some("m/s"),
            Quantity::Density => Some("kg/m**3"),
            Quantity::ForcePerLength => Some("N/m"),
            Quantity::MassPerLength => Some("kg/m"),
        }
    }
}

const FOOT: f64 = 0.3048;
const POUND: f64 = 0.453_592_37;
const POUND_FORCE: f64 = 4.448_221_615_260_5;

/// Quantity and SI factor of a unit string
fn lookup(unit: &str) -> Option<(Quantity, f64)> {
    let entry = match unit {
        "" | "-" => (Quantity::Dimensionless, 1.0),

        "m" => (Quantity::Length, 1.0),
        "cm" => (Quantity::Length, 0.01),
        "mm" => (Quantity::Length, 0.001),
        "ft" => (Quantity::Length, FOOT),
        "inch" | "in" => (Quantity::Length, 0.0254),

        "kg" => (Quantity::Mass, 1.0),
        "g" => (Quantity::Mass, 0.001),
        "lb" => (Quantity::Mass, POUND),

        "N" => (Quantity::Force, 1.0),
        "daN" => (Quantity::Force, 10.0),
        "kN" => (Quantity::Force, 1000.0),
        "lbf" => (Quantity::Force, POUND_FORCE),

        "N*m" => (Quantity::Moment, 1.0),
        "daN*m" => (Quantity::Moment, 10.0),
        "kN*m" => (Quantity::Moment, 1000.0),
        "lbf*ft" => (Quantity::Moment, POUND_FORCE * FOOT),

        "m/s" => (Quantity::Velocity, 1.0),
        "kn" => (Quantity::Velocity, 1852.0 / 3600.0),
        "ft/s" => (Quantity::Velocity, FOOT),
        "km/h" => (Quantity::Velocity, 1.0 / 3.6),

        "kg/m**3" => (Quantity::Density, 1.0),
        "lb/ft**3" => (Quantity::Density, POUND / (FOOT * FOOT * FOOT)),

        "N/m" => (Quantity::ForcePerLength, 1.0),
        "daN/m" => (Quantity::ForcePerLength, 10.0),
        "lbf/ft" => (Quantity::ForcePerLength, POUND_FORCE / FOOT),

        "kg/m" => (Quantity::MassPerLength, 1.0),
        "lb/ft" => (Quantity::MassPerLength, POUND / FOOT),

        _ => return None,
    };
    Some(entry)
}

/// Factor converting a value of `key` in `units` to SI
///
/// # Errors
/// `UnknownUnit` for a unit outside the table, `UnitMismatch` when the unit
/// measures a different quantity than `expected`.
pub fn si_factor(key: &str, units: Option<&str>, expected: Quantity) -> LoadsResult<f64> {
    let Some(unit) = units else {
        return Ok(1.0);
    };
    let (quantity, factor) =
        lookup(unit.trim()).ok_or_else(|| LoadsError::UnknownUnit(unit.to_string()))?;

    if quantity != expected {
        return Err(LoadsError::UnitMismatch {
            key: key.to_string(),
            expected: expected.si_unit().unwrap_or("-").to_string(),
            found: unit.to_string(),
        });
    }
    Ok(factor)
}
