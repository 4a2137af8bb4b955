//! Calendar-aware differences between two points, rendered as text.
//!
//! The gap `initial − final` is split into years and months first (walking
//! whole months so that "1 month" follows the real month length), then the
//! remainder into days, hours, minutes and seconds. All six components share
//! the sign of the gap. Text rendering drops zero components, uses the
//! singular form for a magnitude of one, and joins the rest with commas and a
//! final conjunction: `"5 days, 4 hours, 15 minutes and 15 seconds"`.
//!
//! # Functions
//!
//! - [`calendar_difference`] — Signed component breakdown
//! - [`date_difference_text`] — Years, months and days only
//! - [`date_time_difference_text`] — All six components

use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::CalendarPoint;
use crate::error::ReckonError;

// ── Language ────────────────────────────────────────────────────────────────

/// Word table used when rendering differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// `"1 year, 2 months and 3 days"`
    #[default]
    English,
    /// Brazilian Portuguese: `"1 ano, 2 meses e 3 dias"`
    Portuguese,
}

/// Singular/plural labels in component order, plus the final conjunction.
struct Vocabulary {
    labels: [(&'static str, &'static str); 6],
    conjunction: &'static str,
}

const ENGLISH: Vocabulary = Vocabulary {
    labels: [
        ("year", "years"),
        ("month", "months"),
        ("day", "days"),
        ("hour", "hours"),
        ("minute", "minutes"),
        ("second", "seconds"),
    ],
    conjunction: "and",
};

const PORTUGUESE: Vocabulary = Vocabulary {
    labels: [
        ("ano", "anos"),
        ("mês", "meses"),
        ("dia", "dias"),
        ("hora", "horas"),
        ("minuto", "minutos"),
        ("segundo", "segundos"),
    ],
    conjunction: "e",
};

impl Language {
    fn vocabulary(self) -> &'static Vocabulary {
        match self {
            Language::English => &ENGLISH,
            Language::Portuguese => &PORTUGUESE,
        }
    }
}

impl FromStr for Language {
    type Err = ReckonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "pt" | "pt-br" | "pt_br" | "portuguese" => Ok(Language::Portuguese),
            _ => Err(ReckonError::UnsupportedLanguage(format!("'{}'", s.trim()))),
        }
    }
}

/// Options for the `_with_options` text functions.
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    /// Which word table to render with.
    pub language: Language,
}

// ── calendar_difference ─────────────────────────────────────────────────────

/// Signed breakdown of `initial − final`.
///
/// Every non-zero component carries the same sign. `days` is never folded
/// into months; `hours`, `minutes` and `seconds` stay within ±23/±59/±59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CalendarDifference {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// Exact elapsed seconds between the two timestamps.
    pub total_seconds: i64,
}

impl CalendarDifference {
    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }

    /// Render years, months and days.
    pub fn to_date_text(&self, options: &TextOptions) -> String {
        render(&self.components()[..3], options.language.vocabulary())
    }

    /// Render all six components.
    pub fn to_text(&self, options: &TextOptions) -> String {
        render(&self.components(), options.language.vocabulary())
    }

    fn components(&self) -> [i64; 6] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }
}

/// Compute the calendar-aware difference `initial − final_point`.
///
/// Months are counted by shifting `final_point` whole months towards
/// `initial` (clamping the day to the target month's length, so Jan 31 + 1
/// month is Feb 28) until one more month would overshoot. What is left is
/// split into days and clock components.
pub fn calendar_difference(
    initial: &CalendarPoint,
    final_point: &CalendarPoint,
) -> CalendarDifference {
    let from = initial.as_calendar_timestamp();
    let to = final_point.as_calendar_timestamp();

    let mut months = i64::from(from.year() - to.year()) * 12
        + (i64::from(from.month()) - i64::from(to.month()));
    let mut anchor = shift_months(to, months);
    if from < to {
        while from > anchor {
            months += 1;
            anchor = shift_months(to, months);
        }
    } else {
        while from < anchor {
            months -= 1;
            anchor = shift_months(to, months);
        }
    }

    // i64 division truncates toward zero, which keeps every component on the gap's sign
    let rest = (from - anchor).num_seconds();
    let difference = CalendarDifference {
        years: months / 12,
        months: months % 12,
        days: rest / 86_400,
        hours: rest % 86_400 / 3600,
        minutes: rest % 3600 / 60,
        seconds: rest % 60,
        total_seconds: (from - to).num_seconds(),
    };
    debug!(initial = %initial, final_point = %final_point, ?difference, "computed calendar difference");
    difference
}

fn shift_months(timestamp: NaiveDateTime, months: i64) -> NaiveDateTime {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX));
    if months >= 0 {
        timestamp
            .checked_add_months(magnitude)
            .unwrap_or(NaiveDateTime::MAX)
    } else {
        timestamp
            .checked_sub_months(magnitude)
            .unwrap_or(NaiveDateTime::MIN)
    }
}

// ── Text rendering ──────────────────────────────────────────────────────────

/// Render the gap between two points as years, months and days.
///
/// Clock components are computed but not shown. Equal dates render as `""`.
///
/// # Examples
///
/// ```
/// use reckon_engine::{date_difference_text, CalendarPoint};
///
/// let text = date_difference_text(
///     &CalendarPoint::date(2022, 11, 10),
///     &CalendarPoint::date(2022, 11, 5),
/// );
/// assert_eq!(text, "5 days");
/// ```
pub fn date_difference_text(initial: &CalendarPoint, final_point: &CalendarPoint) -> String {
    date_difference_text_with_options(initial, final_point, &TextOptions::default())
}

/// [`date_difference_text`] with an explicit [`TextOptions`].
pub fn date_difference_text_with_options(
    initial: &CalendarPoint,
    final_point: &CalendarPoint,
    options: &TextOptions,
) -> String {
    calendar_difference(initial, final_point).to_date_text(options)
}

/// Render the gap between two points using all six components.
///
/// # Examples
///
/// ```
/// use reckon_engine::{date_time_difference_text, CalendarPoint};
///
/// let text = date_time_difference_text(
///     &CalendarPoint::new(2022, 11, 10, 18, 30, 30),
///     &CalendarPoint::new(2022, 11, 5, 14, 15, 15),
/// );
/// assert_eq!(text, "5 days, 4 hours, 15 minutes and 15 seconds");
/// ```
pub fn date_time_difference_text(initial: &CalendarPoint, final_point: &CalendarPoint) -> String {
    date_time_difference_text_with_options(initial, final_point, &TextOptions::default())
}

/// [`date_time_difference_text`] with an explicit [`TextOptions`].
pub fn date_time_difference_text_with_options(
    initial: &CalendarPoint,
    final_point: &CalendarPoint,
    options: &TextOptions,
) -> String {
    calendar_difference(initial, final_point).to_text(options)
}

fn render(components: &[i64], vocabulary: &Vocabulary) -> String {
    let phrases: Vec<String> = components
        .iter()
        .zip(vocabulary.labels.iter())
        .filter(|(value, _)| **value != 0)
        .map(|(value, (singular, plural))| {
            let magnitude = value.unsigned_abs();
            let label = if magnitude == 1 { singular } else { plural };
            format!("{magnitude} {label}")
        })
        .collect();
    join_phrases(&phrases, vocabulary.conjunction)
}

/// `a` / `a and b` / `a, b and c`
fn join_phrases(phrases: &[String], conjunction: &str) -> String {
    match phrases {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} {conjunction} {last}", head.join(", ")),
    }
}
