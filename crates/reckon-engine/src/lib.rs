//! # reckon-engine
//!
//! Deterministic unit conversion and calendar arithmetic.
//!
//! Two independent, pure components: a conversion engine that re-expresses a
//! measurement in another unit of the same dimension using a fixed factor
//! table, and a calendar module that normalizes loosely-specified dates,
//! shifts them by day/clock spans and renders the calendar-aware gap between
//! two of them as a phrase like `"5 days, 4 hours, 15 minutes and 15 seconds"`.
//!
//! Nothing here performs I/O or holds mutable state; every function is safe to
//! call from any thread.
//!
//! ## Modules
//!
//! - [`units`] — Dimensions and the closed set of units
//! - [`factors`] — The `(source, target) → factor` table
//! - [`conversion`] — Measurements and the conversion guard
//! - [`calendar`] — Normalizing calendar points, add/remove arithmetic
//! - [`difference`] — Calendar-aware differences and their text rendering
//! - [`error`] — Error types

pub mod calendar;
pub mod conversion;
pub mod difference;
pub mod error;
pub mod factors;
pub mod units;

pub use calendar::{
    add_to_date, build_calendar_point, remove_from_date, CalendarFields, CalendarPoint, RawFields,
};
pub use conversion::{build_measurement, convert_measurement, is_convertible, Measurement};
pub use difference::{
    calendar_difference, date_difference_text, date_difference_text_with_options,
    date_time_difference_text, date_time_difference_text_with_options, CalendarDifference,
    Language, TextOptions,
};
pub use error::ReckonError;
pub use factors::Factor;
pub use units::{Dimension, Unit};
