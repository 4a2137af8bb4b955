//! Calendar points with lenient field normalization, plus add/remove arithmetic.
//!
//! A [`CalendarPoint`] stores whatever integers it was built with and
//! normalizes each field every time it is read. Nothing is rejected at
//! construction: out-of-range values are clamped, over-long values are cut to
//! their leading digits, and short years are scaled up to four digits.
//!
//! | Field  | Width | Legal range | Empty default |
//! |--------|-------|-------------|---------------|
//! | year   | 4     | (scaled)    | 1             |
//! | month  | 2     | 1..=12      | 1             |
//! | day    | 2     | 1..=31      | 1             |
//! | hour   | 2     | 0..=23      | 0             |
//! | minute | 2     | 0..=59      | 0             |
//! | second | 2     | 0..=59      | 0             |
//!
//! Days are not bounded by the month's real length. When a point is turned
//! into a timestamp the day counts forward from the first of the month, so
//! February 31st lands on March 3rd (or 2nd in leap years).
//!
//! # Functions
//!
//! - [`build_calendar_point`] — Build a point from six raw fields
//! - [`add_to_date`] — Shift a point forward by another point's day/hour/minute/second
//! - [`remove_from_date`] — Shift a point backward by the same amount

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{ReckonError, Result};

// ── Field normalization ─────────────────────────────────────────────────────

/// How one stored field is read back.
#[derive(Debug, Clone, Copy)]
struct FieldRule {
    name: &'static str,
    width: usize,
    /// Clamp bounds. `None` means short values are scaled up to `width` digits instead.
    bounds: Option<(i64, i64)>,
    empty: i64,
}

const YEAR: FieldRule = FieldRule {
    name: "year",
    width: 4,
    bounds: None,
    empty: 1,
};
const MONTH: FieldRule = FieldRule {
    name: "month",
    width: 2,
    bounds: Some((1, 12)),
    empty: 1,
};
const DAY: FieldRule = FieldRule {
    name: "day",
    width: 2,
    bounds: Some((1, 31)),
    empty: 1,
};
const HOUR: FieldRule = FieldRule {
    name: "hour",
    width: 2,
    bounds: Some((0, 23)),
    empty: 0,
};
const MINUTE: FieldRule = FieldRule {
    name: "minute",
    width: 2,
    bounds: Some((0, 59)),
    empty: 0,
};
const SECOND: FieldRule = FieldRule {
    name: "second",
    width: 2,
    bounds: Some((0, 59)),
    empty: 0,
};

impl FieldRule {
    /// Normalize a raw stored value.
    ///
    /// Works on the decimal text of the value, sign included, so `-5` is two
    /// characters wide.
    fn normalize(&self, raw: i64) -> i64 {
        let digits = raw.to_string();
        if digits.is_empty() {
            return self.empty;
        }

        let len = digits.len();
        let value = if len > self.width {
            digits[..self.width].parse().unwrap_or(self.empty)
        } else if self.bounds.is_none() && len < self.width {
            raw * 10i64.pow((self.width - len) as u32)
        } else {
            raw
        };

        match self.bounds {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }

    fn read(&self, raw: i64) -> i64 {
        let value = self.normalize(raw);
        if value != raw {
            trace!(field = self.name, raw, value, "normalized calendar field");
        }
        value
    }
}

// ── CalendarPoint ───────────────────────────────────────────────────────────

/// The six normalized fields of a [`CalendarPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// The six fields exactly as they were stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawFields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

/// A year/month/day/hour/minute/second tuple read through normalizing accessors.
///
/// Equality compares the normalized fields, so `CalendarPoint::date(2022, 70, 1)`
/// equals `CalendarPoint::date(2022, 12, 1)`.
///
/// # Examples
///
/// ```
/// use reckon_engine::CalendarPoint;
///
/// let point = CalendarPoint::default().with_hour(32).with_minute(70).with_second(90);
/// assert_eq!((point.hour(), point.minute(), point.second()), (23, 59, 59));
/// assert_eq!(CalendarPoint::default().with_day(-1).day(), 1);
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(into = "CalendarFields")]
pub struct CalendarPoint {
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
}

impl Default for CalendarPoint {
    /// `1000-01-01 00:00:00`
    fn default() -> Self {
        Self::new(1000, 1, 1, 0, 0, 0)
    }
}

impl CalendarPoint {
    pub fn new(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// A point at midnight of the given date.
    pub fn date(year: i64, month: i64, day: i64) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Build a point, rejecting any field that normalization would change.
    ///
    /// # Errors
    ///
    /// Returns [`ReckonError::InvalidPoint`] naming the first offending field.
    pub fn strict(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Result<Self> {
        let checks = [
            (YEAR, year),
            (MONTH, month),
            (DAY, day),
            (HOUR, hour),
            (MINUTE, minute),
            (SECOND, second),
        ];
        for (rule, raw) in checks {
            let normalized = rule.normalize(raw);
            if normalized != raw {
                return Err(ReckonError::InvalidPoint(format!(
                    "{} {} would read as {}",
                    rule.name, raw, normalized
                )));
            }
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Decompose a timestamp into a fresh point.
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        Self::new(
            i64::from(timestamp.year()),
            i64::from(timestamp.month()),
            i64::from(timestamp.day()),
            i64::from(timestamp.hour()),
            i64::from(timestamp.minute()),
            i64::from(timestamp.second()),
        )
    }

    pub fn with_year(self, year: i64) -> Self {
        Self { year, ..self }
    }

    pub fn with_month(self, month: i64) -> Self {
        Self { month, ..self }
    }

    pub fn with_day(self, day: i64) -> Self {
        Self { day, ..self }
    }

    pub fn with_hour(self, hour: i64) -> Self {
        Self { hour, ..self }
    }

    pub fn with_minute(self, minute: i64) -> Self {
        Self { minute, ..self }
    }

    pub fn with_second(self, second: i64) -> Self {
        Self { second, ..self }
    }

    /// Normalized year. One- to three-digit values are scaled up
    /// (`5` → `5000`, `22` → `2200`, `202` → `2020`); longer ones keep their
    /// first four characters.
    pub fn year(&self) -> i32 {
        // at most four characters survive, so this always fits
        YEAR.read(self.year) as i32
    }

    pub fn month(&self) -> u32 {
        MONTH.read(self.month) as u32
    }

    pub fn day(&self) -> u32 {
        DAY.read(self.day) as u32
    }

    pub fn hour(&self) -> u32 {
        HOUR.read(self.hour) as u32
    }

    pub fn minute(&self) -> u32 {
        MINUTE.read(self.minute) as u32
    }

    pub fn second(&self) -> u32 {
        SECOND.read(self.second) as u32
    }

    pub fn fields(&self) -> CalendarFields {
        CalendarFields {
            year: self.year(),
            month: self.month(),
            day: self.day(),
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
        }
    }

    pub fn raw(&self) -> RawFields {
        RawFields {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }

    /// The absolute point in time described by the six normalized fields.
    pub fn as_calendar_timestamp(&self) -> NaiveDateTime {
        let first_of_month =
            NaiveDate::from_ymd_opt(self.year(), self.month(), 1).unwrap_or(NaiveDate::MIN);
        let date = first_of_month
            .checked_add_days(Days::new(u64::from(self.day() - 1)))
            .unwrap_or(NaiveDate::MAX);
        let time =
            NaiveTime::from_hms_opt(self.hour(), self.minute(), self.second()).unwrap_or_default();
        date.and_time(time)
    }

    /// The day/hour/minute/second fields as a flat span. Year and month are ignored.
    pub fn as_clock_duration(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.day()))
            + chrono::Duration::hours(i64::from(self.hour()))
            + chrono::Duration::minutes(i64::from(self.minute()))
            + chrono::Duration::seconds(i64::from(self.second()))
    }
}

impl PartialEq for CalendarPoint {
    fn eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}

impl Eq for CalendarPoint {}

impl From<CalendarPoint> for CalendarFields {
    fn from(point: CalendarPoint) -> Self {
        point.fields()
    }
}

impl fmt::Display for CalendarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CalendarFields {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = self.fields();
        write!(
            f,
            "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
        )
    }
}

impl FromStr for CalendarPoint {
    type Err = ReckonError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Numbers are taken as raw fields and normalized on read like any other
    /// input, so `2022-13-40` parses and reads as `2022-12-31`. The year may
    /// carry a leading `-`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = |reason: &str| ReckonError::InvalidPoint(format!("'{s}': {reason}"));

        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (s, None),
        };

        let (negative_year, date_body) = match date_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };
        let date_fields = parse_numbers(date_body, '-')
            .ok_or_else(|| invalid("expected YYYY-MM-DD"))?;
        let [year, month, day] = date_fields;
        let year = if negative_year { -year } else { year };

        let [hour, minute, second] = match time_part {
            Some(time) => parse_numbers(time, ':').ok_or_else(|| invalid("expected HH:MM:SS"))?,
            None => [0, 0, 0],
        };

        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

/// Split `s` on `separator` into exactly three integers.
fn parse_numbers(s: &str, separator: char) -> Option<[i64; 3]> {
    let mut parts = s.split(separator).map(|part| part.parse::<i64>().ok());
    let numbers = [parts.next()??, parts.next()??, parts.next()??];
    if parts.next().is_some() {
        return None;
    }
    Some(numbers)
}

/// Build a point from six raw fields. See [`CalendarPoint`] for how they read back.
pub fn build_calendar_point(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> CalendarPoint {
    CalendarPoint::new(year, month, day, hour, minute, second)
}

// ── add_to_date / remove_from_date ──────────────────────────────────────────

/// Shift `base` forward by `delta`'s day, hour, minute and second fields.
///
/// `delta`'s year and month are ignored. Its day field reads as at least 1,
/// so a delta built only from clock fields still carries one day.
///
/// Arithmetic that would leave chrono's representable range saturates at
/// [`NaiveDateTime::MAX`].
///
/// The result is re-read through the year rule like any other point, so
/// [`remove_from_date`] only undoes this while the shifted year is still four
/// characters wide. `9999-12-31` plus one day is stored as year `10000` and
/// reads as `1000-01-01`; `-100-12-31` plus one day reads as `-990-01-01`.
///
/// # Examples
///
/// ```
/// use reckon_engine::{add_to_date, CalendarPoint};
///
/// let base = CalendarPoint::date(2022, 11, 10);
/// let delta = CalendarPoint::default().with_day(5);
/// assert_eq!(add_to_date(&base, &delta), CalendarPoint::date(2022, 11, 15));
/// ```
pub fn add_to_date(base: &CalendarPoint, delta: &CalendarPoint) -> CalendarPoint {
    let span = delta.as_clock_duration();
    let shifted = base
        .as_calendar_timestamp()
        .checked_add_signed(span)
        .unwrap_or(NaiveDateTime::MAX);
    debug!(base = %base, seconds = span.num_seconds(), result = %shifted, "added to date");
    CalendarPoint::from_timestamp(shifted)
}

/// Shift `base` backward by `delta`'s day, hour, minute and second fields.
///
/// Saturates at [`NaiveDateTime::MIN`]. See [`add_to_date`].
pub fn remove_from_date(base: &CalendarPoint, delta: &CalendarPoint) -> CalendarPoint {
    let span = delta.as_clock_duration();
    let shifted = base
        .as_calendar_timestamp()
        .checked_sub_signed(span)
        .unwrap_or(NaiveDateTime::MIN);
    debug!(base = %base, seconds = span.num_seconds(), result = %shifted, "removed from date");
    CalendarPoint::from_timestamp(shifted)
}
