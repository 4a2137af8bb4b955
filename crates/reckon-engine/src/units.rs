//! The closed taxonomy of measurement units.
//!
//! Every [`Unit`] belongs to exactly one [`Dimension`]. The mapping is a
//! static `match`, so it can never drift at runtime. [`Dimension::Unknown`]
//! exists for callers that need a catch-all category; no unit maps to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReckonError;

// ── Dimension ───────────────────────────────────────────────────────────────

/// A category of physically comparable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Length,
    Area,
    Volume,
    Time,
    Speed,
    Mass,
    Unknown,
}

impl Dimension {
    /// Every dimension, in declaration order.
    pub const ALL: [Dimension; 7] = [
        Dimension::Length,
        Dimension::Area,
        Dimension::Volume,
        Dimension::Time,
        Dimension::Speed,
        Dimension::Mass,
        Dimension::Unknown,
    ];

    /// Lowercase name of the dimension (e.g. `"volume"`).
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
            Dimension::Time => "time",
            Dimension::Speed => "speed",
            Dimension::Mass => "mass",
            Dimension::Unknown => "unknown",
        }
    }

    /// The units of this dimension, in declaration order.
    pub fn units(self) -> impl Iterator<Item = Unit> {
        Unit::ALL.into_iter().filter(move |u| u.dimension() == self)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = ReckonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Dimension::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| ReckonError::UnknownDimension(format!("'{}'", s.trim())))
    }
}

// ── Unit ────────────────────────────────────────────────────────────────────

/// A named unit of measurement.
///
/// The set is fixed: 9 length, 5 area, 10 volume, 5 time, 3 speed and
/// 2 mass units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    // Length
    Meter,
    Millimeter,
    Centimeter,
    Decimeter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,

    // Area
    SquareMeter,
    SquareInch,
    SquareFeet,
    SquareYard,
    SquareMile,

    // Volume
    CubicMeter,
    CubicInch,
    CubicFoot,
    CubicYard,
    Liter,
    Milliliter,
    Centiliter,
    Deciliter,
    Hectoliter,
    Gallon,

    // Time
    Second,
    Minute,
    Hour,
    Day,
    Year,

    // Speed
    MilesPerHour,
    MetersPerSecond,
    KilometerPerHour,

    // Mass
    Gram,
    Kilogram,
}

impl Unit {
    /// Every unit, in declaration order.
    pub const ALL: [Unit; 34] = [
        Unit::Meter,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Decimeter,
        Unit::Kilometer,
        Unit::Inch,
        Unit::Foot,
        Unit::Yard,
        Unit::Mile,
        Unit::SquareMeter,
        Unit::SquareInch,
        Unit::SquareFeet,
        Unit::SquareYard,
        Unit::SquareMile,
        Unit::CubicMeter,
        Unit::CubicInch,
        Unit::CubicFoot,
        Unit::CubicYard,
        Unit::Liter,
        Unit::Milliliter,
        Unit::Centiliter,
        Unit::Deciliter,
        Unit::Hectoliter,
        Unit::Gallon,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Year,
        Unit::MilesPerHour,
        Unit::MetersPerSecond,
        Unit::KilometerPerHour,
        Unit::Gram,
        Unit::Kilogram,
    ];

    /// The dimension this unit measures.
    pub fn dimension(self) -> Dimension {
        use Unit::*;
        match self {
            Meter | Millimeter | Centimeter | Decimeter | Kilometer | Inch | Foot | Yard | Mile => {
                Dimension::Length
            }
            SquareMeter | SquareInch | SquareFeet | SquareYard | SquareMile => Dimension::Area,
            CubicMeter | CubicInch | CubicFoot | CubicYard | Liter | Milliliter | Centiliter
            | Deciliter | Hectoliter | Gallon => Dimension::Volume,
            Second | Minute | Hour | Day | Year => Dimension::Time,
            MilesPerHour | MetersPerSecond | KilometerPerHour => Dimension::Speed,
            Gram | Kilogram => Dimension::Mass,
        }
    }

    /// Snake-case identifier (e.g. `"square_feet"`, `"miles_per_hour"`).
    pub fn name(self) -> &'static str {
        match self {
            Unit::Meter => "meter",
            Unit::Millimeter => "millimeter",
            Unit::Centimeter => "centimeter",
            Unit::Decimeter => "decimeter",
            Unit::Kilometer => "kilometer",
            Unit::Inch => "inch",
            Unit::Foot => "foot",
            Unit::Yard => "yard",
            Unit::Mile => "mile",
            Unit::SquareMeter => "square_meter",
            Unit::SquareInch => "square_inch",
            Unit::SquareFeet => "square_feet",
            Unit::SquareYard => "square_yard",
            Unit::SquareMile => "square_mile",
            Unit::CubicMeter => "cubic_meter",
            Unit::CubicInch => "cubic_inch",
            Unit::CubicFoot => "cubic_foot",
            Unit::CubicYard => "cubic_yard",
            Unit::Liter => "liter",
            Unit::Milliliter => "milliliter",
            Unit::Centiliter => "centiliter",
            Unit::Deciliter => "deciliter",
            Unit::Hectoliter => "hectoliter",
            Unit::Gallon => "gallon",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Year => "year",
            Unit::MilesPerHour => "miles_per_hour",
            Unit::MetersPerSecond => "meters_per_second",
            Unit::KilometerPerHour => "kilometer_per_hour",
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
        }
    }

    /// Whether a value in this unit can be re-expressed in `other`.
    ///
    /// Compares dimensions only; it says nothing about whether the factor
    /// table actually holds an entry for the pair.
    pub fn is_convertible_to(self, other: Unit) -> bool {
        self.dimension() == other.dimension()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = ReckonError;

    /// Parse a unit name. Case-insensitive; `-`, `_` and spaces are
    /// interchangeable separators (`"Square-Feet"` → [`Unit::SquareFeet`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Unit::ALL
            .into_iter()
            .find(|u| u.name() == wanted)
            .ok_or_else(|| ReckonError::UnknownUnit(format!("'{}'", s.trim())))
    }
}
