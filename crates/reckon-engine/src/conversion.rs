//! Measurements and unit conversion.
//!
//! A [`Measurement`] is a value tagged with its [`Unit`]. Converting never
//! mutates the input; every successful conversion yields a new measurement.
//!
//! # Functions
//!
//! - [`build_measurement`] — Tag a value with a unit
//! - [`convert_measurement`] — Re-express a measurement in another unit of the same dimension
//! - [`is_convertible`] — Dimension check used as the conversion guard

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ReckonError, Result};
use crate::factors;
use crate::units::Unit;

/// A value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub unit: Unit,
    pub value: f64,
}

impl Measurement {
    pub fn new(unit: Unit, value: f64) -> Self {
        Self { unit, value }
    }

    /// Shortcut for [`convert_measurement`].
    pub fn convert_to(&self, target: Unit) -> Result<Measurement> {
        convert_measurement(self, target)
    }

    /// Whether this measurement's unit shares a dimension with `target`.
    pub fn is_convertible_to(&self, target: Unit) -> bool {
        is_convertible(self.unit, target)
    }
}

/// Tag `value` with `unit`. No validation is performed.
pub fn build_measurement(unit: Unit, value: f64) -> Measurement {
    Measurement::new(unit, value)
}

/// Whether a value in `from` can be re-expressed in `to`.
///
/// True whenever both units share a dimension, even if the factor table has
/// no entry for the pair.
pub fn is_convertible(from: Unit, to: Unit) -> bool {
    from.is_convertible_to(to)
}

/// Convert a measurement into `target`.
///
/// # Errors
///
/// Returns [`ReckonError::Conversion`] if `target` belongs to a different
/// dimension than the measurement's unit.
///
/// # Fallback
///
/// When no factor is registered for the ordered pair (converting a unit to
/// itself is the common case) the input measurement is returned unchanged.
///
/// # Examples
///
/// ```
/// use reckon_engine::{build_measurement, convert_measurement, Unit};
///
/// let meters = build_measurement(Unit::Meter, 27.08);
/// let millimeters = convert_measurement(&meters, Unit::Millimeter).unwrap();
/// assert_eq!(millimeters.unit, Unit::Millimeter);
/// assert_eq!(millimeters.value, 27080.0);
///
/// assert!(convert_measurement(&meters, Unit::Gram).is_err());
/// ```
pub fn convert_measurement(measurement: &Measurement, target: Unit) -> Result<Measurement> {
    let source = measurement.unit;
    if !is_convertible(source, target) {
        warn!(from = %source, to = %target, "rejected cross-dimension conversion");
        return Err(ReckonError::Conversion {
            from: source,
            to: target,
        });
    }

    match factors::factor(source, target) {
        Some(factor) => {
            let converted = Measurement::new(target, factor.apply(measurement.value));
            debug!(
                from = %source,
                to = %target,
                value = measurement.value,
                result = converted.value,
                "converted measurement"
            );
            Ok(converted)
        }
        None => {
            debug!(from = %source, to = %target, "no factor registered, returning input");
            Ok(*measurement)
        }
    }
}
