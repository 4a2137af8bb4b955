//! The conversion factor table.
//!
//! Each ordered pair of units inside a dimension carries its own literal
//! constant. The constants are rounded independently per direction, so
//! `a → b → a` lands close to, but not always exactly on, the starting value
//! (meter → mile → meter drifts by roughly 0.01%).
//!
//! Pairs without an entry (a unit converted to itself, or a pair nobody
//! registered) are not errors: [`crate::conversion::convert_measurement`]
//! hands the input back untouched. Completeness is therefore checked by the
//! tests in this module, not at runtime.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::units::Unit;

/// A scalar transform from one unit into another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    /// `value * constant`
    Mul(f64),
    /// `value / constant`
    Div(f64),
}

impl Factor {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Factor::Mul(constant) => value * constant,
            Factor::Div(constant) => value / constant,
        }
    }
}

use Factor::{Div, Mul};
use Unit::*;

#[rustfmt::skip]
const FACTORS: &[(Unit, Unit, Factor)] = &[
    // Length
    (Meter, Millimeter, Mul(1000.0)),
    (Meter, Centimeter, Mul(100.0)),
    (Meter, Decimeter, Mul(10.0)),
    (Meter, Kilometer, Div(1000.0)),
    (Meter, Inch, Mul(39.37)),
    (Meter, Foot, Mul(3.281)),
    (Meter, Yard, Mul(1.094)),
    (Meter, Mile, Div(1609.0)),
    (Millimeter, Meter, Div(1000.0)),
    (Millimeter, Centimeter, Div(10.0)),
    (Millimeter, Decimeter, Div(100.0)),
    (Millimeter, Kilometer, Div(1e6)),
    (Millimeter, Inch, Div(25.4)),
    (Millimeter, Foot, Div(304.8)),
    (Millimeter, Yard, Div(914.4)),
    (Millimeter, Mile, Div(1.609e6)),
    (Centimeter, Meter, Div(100.0)),
    (Centimeter, Millimeter, Mul(10.0)),
    (Centimeter, Decimeter, Div(10.0)),
    (Centimeter, Kilometer, Div(100000.0)),
    (Centimeter, Inch, Div(2.54)),
    (Centimeter, Foot, Div(30.48)),
    (Centimeter, Yard, Div(91.44)),
    (Centimeter, Mile, Div(160900.0)),
    (Decimeter, Meter, Div(10.0)),
    (Decimeter, Millimeter, Mul(100.0)),
    (Decimeter, Centimeter, Mul(10.0)),
    (Decimeter, Kilometer, Div(10000.0)),
    (Decimeter, Inch, Mul(3.937)),
    (Decimeter, Foot, Div(3.048)),
    (Decimeter, Yard, Div(9.144)),
    (Decimeter, Mile, Div(16090.0)),
    (Kilometer, Meter, Mul(1000.0)),
    (Kilometer, Millimeter, Mul(1e6)),
    (Kilometer, Centimeter, Mul(100000.0)),
    (Kilometer, Decimeter, Mul(10000.0)),
    (Kilometer, Inch, Mul(39370.0)),
    (Kilometer, Foot, Mul(3281.0)),
    (Kilometer, Yard, Mul(1094.0)),
    (Kilometer, Mile, Div(1.609)),
    (Inch, Meter, Div(39.37)),
    (Inch, Millimeter, Mul(25.4)),
    (Inch, Centimeter, Mul(2.54)),
    (Inch, Decimeter, Div(3.937)),
    (Inch, Kilometer, Div(39370.0)),
    (Inch, Foot, Div(12.0)),
    (Inch, Yard, Div(36.0)),
    (Inch, Mile, Div(63360.0)),
    (Foot, Meter, Div(3.281)),
    (Foot, Millimeter, Mul(304.8)),
    (Foot, Centimeter, Mul(30.48)),
    (Foot, Decimeter, Mul(3.048)),
    (Foot, Kilometer, Div(3281.0)),
    (Foot, Inch, Mul(12.0)),
    (Foot, Yard, Div(3.0)),
    (Foot, Mile, Div(5280.0)),
    (Yard, Meter, Div(1.094)),
    (Yard, Millimeter, Mul(914.4)),
    (Yard, Centimeter, Mul(91.44)),
    (Yard, Decimeter, Mul(9.144)),
    (Yard, Kilometer, Div(1094.0)),
    (Yard, Inch, Mul(36.0)),
    (Yard, Foot, Mul(3.0)),
    (Yard, Mile, Div(1760.0)),
    (Mile, Meter, Mul(1609.0)),
    (Mile, Millimeter, Mul(1.609e6)),
    (Mile, Centimeter, Mul(160900.0)),
    (Mile, Decimeter, Mul(16090.0)),
    (Mile, Kilometer, Mul(1.609)),
    (Mile, Inch, Mul(63360.0)),
    (Mile, Foot, Mul(5280.0)),
    (Mile, Yard, Mul(1760.0)),

    // Area
    (SquareMeter, SquareInch, Mul(1550.0)),
    (SquareMeter, SquareFeet, Mul(10.764)),
    (SquareMeter, SquareYard, Mul(1.196)),
    (SquareMeter, SquareMile, Div(2.59e6)),
    (SquareInch, SquareMeter, Div(1550.0)),
    (SquareInch, SquareFeet, Div(144.0)),
    (SquareInch, SquareYard, Div(1296.0)),
    (SquareInch, SquareMile, Div(4.014e9)),
    (SquareFeet, SquareMeter, Div(10.764)),
    (SquareFeet, SquareInch, Mul(144.0)),
    (SquareFeet, SquareYard, Div(9.0)),
    (SquareFeet, SquareMile, Div(2.788e7)),
    (SquareYard, SquareMeter, Div(1.196)),
    (SquareYard, SquareInch, Mul(1296.0)),
    (SquareYard, SquareFeet, Mul(9.0)),
    (SquareYard, SquareMile, Div(3.098e6)),
    (SquareMile, SquareMeter, Mul(2.59e6)),
    (SquareMile, SquareInch, Mul(4.014e9)),
    (SquareMile, SquareFeet, Mul(2.788e7)),
    (SquareMile, SquareYard, Mul(3.098e6)),

    // Volume
    (CubicMeter, CubicInch, Mul(61020.0)),
    (CubicMeter, CubicFoot, Mul(35.315)),
    (CubicMeter, CubicYard, Mul(1.308)),
    (CubicMeter, Liter, Mul(1000.0)),
    (CubicMeter, Milliliter, Mul(1e6)),
    (CubicMeter, Centiliter, Mul(100000.0)),
    (CubicMeter, Deciliter, Mul(10000.0)),
    (CubicMeter, Hectoliter, Mul(10.0)),
    (CubicMeter, Gallon, Mul(264.2)),
    (CubicInch, CubicMeter, Div(61020.0)),
    (CubicInch, CubicFoot, Div(1728.0)),
    (CubicInch, CubicYard, Div(46660.0)),
    (CubicInch, Liter, Div(61.024)),
    (CubicInch, Milliliter, Mul(16.387)),
    (CubicInch, Centiliter, Mul(1.639)),
    (CubicInch, Deciliter, Div(6.102)),
    (CubicInch, Hectoliter, Div(6102.0)),
    (CubicInch, Gallon, Div(231.0)),
    (CubicFoot, CubicMeter, Div(35.315)),
    (CubicFoot, CubicInch, Mul(1728.0)),
    (CubicFoot, CubicYard, Div(27.0)),
    (CubicFoot, Liter, Mul(28.317)),
    (CubicFoot, Milliliter, Mul(28320.0)),
    (CubicFoot, Centiliter, Mul(2832.0)),
    (CubicFoot, Deciliter, Mul(283.2)),
    (CubicFoot, Hectoliter, Div(3.532)),
    (CubicFoot, Gallon, Mul(7.481)),
    (CubicYard, CubicMeter, Div(1.308)),
    (CubicYard, CubicInch, Mul(46660.0)),
    (CubicYard, CubicFoot, Mul(27.0)),
    (CubicYard, Liter, Mul(764.6)),
    (CubicYard, Milliliter, Mul(764600.0)),
    (CubicYard, Centiliter, Mul(76460.0)),
    (CubicYard, Deciliter, Mul(7646.0)),
    (CubicYard, Hectoliter, Mul(7.646)),
    (CubicYard, Gallon, Mul(202.0)),
    (Liter, CubicMeter, Div(1000.0)),
    (Liter, CubicInch, Mul(61.024)),
    (Liter, CubicFoot, Div(28.317)),
    (Liter, CubicYard, Div(764.6)),
    (Liter, Milliliter, Mul(1000.0)),
    (Liter, Centiliter, Mul(100.0)),
    (Liter, Deciliter, Mul(10.0)),
    (Liter, Hectoliter, Div(100.0)),
    (Liter, Gallon, Div(3.785)),
    (Milliliter, CubicMeter, Div(1e6)),
    (Milliliter, CubicInch, Div(16.387)),
    (Milliliter, CubicFoot, Div(28320.0)),
    (Milliliter, CubicYard, Div(764600.0)),
    (Milliliter, Liter, Div(1000.0)),
    (Milliliter, Centiliter, Div(10.0)),
    (Milliliter, Deciliter, Div(100.0)),
    (Milliliter, Hectoliter, Div(100000.0)),
    (Milliliter, Gallon, Div(3785.0)),
    (Centiliter, CubicMeter, Div(100000.0)),
    (Centiliter, CubicInch, Div(1.639)),
    (Centiliter, CubicFoot, Div(2832.0)),
    (Centiliter, CubicYard, Div(76460.0)),
    (Centiliter, Liter, Div(100.0)),
    (Centiliter, Milliliter, Mul(10.0)),
    (Centiliter, Deciliter, Div(10.0)),
    (Centiliter, Hectoliter, Div(10000.0)),
    (Centiliter, Gallon, Div(378.5)),
    (Deciliter, CubicMeter, Div(10000.0)),
    (Deciliter, CubicInch, Mul(6.102)),
    (Deciliter, CubicFoot, Div(283.2)),
    (Deciliter, CubicYard, Div(7646.0)),
    (Deciliter, Liter, Div(10.0)),
    (Deciliter, Milliliter, Mul(100.0)),
    (Deciliter, Centiliter, Mul(10.0)),
    (Deciliter, Hectoliter, Div(1000.0)),
    (Deciliter, Gallon, Div(37.854)),
    (Hectoliter, CubicMeter, Div(10.0)),
    (Hectoliter, CubicInch, Mul(6102.0)),
    (Hectoliter, CubicFoot, Mul(3.531)),
    (Hectoliter, CubicYard, Div(7.646)),
    (Hectoliter, Liter, Mul(100.0)),
    (Hectoliter, Milliliter, Mul(100000.0)),
    (Hectoliter, Centiliter, Mul(10000.0)),
    (Hectoliter, Deciliter, Mul(1000.0)),
    (Hectoliter, Gallon, Mul(26.417)),
    (Gallon, CubicMeter, Div(264.2)),
    (Gallon, CubicInch, Mul(231.0)),
    (Gallon, CubicFoot, Div(7.48)),
    (Gallon, CubicYard, Div(202.0)),
    (Gallon, Liter, Mul(3.785)),
    (Gallon, Milliliter, Mul(3785.0)),
    (Gallon, Centiliter, Mul(378.5)),
    (Gallon, Deciliter, Mul(37.854)),
    (Gallon, Hectoliter, Div(26.417)),

    // Time
    (Second, Minute, Div(60.0)),
    (Second, Hour, Div(3600.0)),
    (Second, Day, Div(86400.0)),
    (Second, Year, Div(3.154e7)),
    (Minute, Second, Mul(60.0)),
    (Minute, Hour, Div(60.0)),
    (Minute, Day, Div(1440.0)),
    (Minute, Year, Div(525600.0)),
    (Hour, Second, Mul(3600.0)),
    (Hour, Minute, Mul(60.0)),
    (Hour, Day, Div(24.0)),
    (Hour, Year, Div(8760.0)),
    (Day, Second, Mul(86400.0)),
    (Day, Minute, Mul(1440.0)),
    (Day, Hour, Mul(24.0)),
    (Day, Year, Div(365.0)),
    (Year, Second, Mul(3.154e7)),
    (Year, Minute, Mul(525600.0)),
    (Year, Hour, Mul(8760.0)),
    (Year, Day, Mul(365.0)),

    // Speed
    (MilesPerHour, MetersPerSecond, Div(2.237)),
    (MilesPerHour, KilometerPerHour, Mul(1.609)),
    (MetersPerSecond, MilesPerHour, Mul(2.237)),
    (MetersPerSecond, KilometerPerHour, Mul(3.6)),
    (KilometerPerHour, MilesPerHour, Div(1.609)),
    (KilometerPerHour, MetersPerSecond, Div(3.6)),

    // Mass
    (Gram, Kilogram, Div(1000.0)),
    (Kilogram, Gram, Mul(1000.0)),
];

fn table() -> &'static HashMap<(Unit, Unit), Factor> {
    static TABLE: OnceLock<HashMap<(Unit, Unit), Factor>> = OnceLock::new();
    TABLE.get_or_init(|| {
        FACTORS
            .iter()
            .map(|&(from, to, factor)| ((from, to), factor))
            .collect()
    })
}

/// The factor registered for `from → to`, if any.
pub fn factor(from: Unit, to: Unit) -> Option<Factor> {
    table().get(&(from, to)).copied()
}

/// Every registered `(from, to, factor)` entry, in table order.
pub fn entries() -> impl Iterator<Item = (Unit, Unit, Factor)> {
    FACTORS.iter().copied()
}
