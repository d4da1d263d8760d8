//! Calendar date value: parsing, display and day arithmetic.
//!
//! # Responsibility
//! - Accept the single textual wire format `dd/mm/yyyy`.
//! - Render dates as `dd/mm/yyyy (weekday)` with a fixed weekday table.
//! - Shift dates by a signed number of days.
//!
//! # Invariants
//! - A `CalendarDate` always names a real proleptic-Gregorian day.
//! - Years stay within `MIN_YEAR..=MAX_YEAR` so the short text keeps four digits.
//! - Values are immutable; arithmetic returns new values.
//! - No time-of-day or timezone component exists anywhere in this type.

use crate::error::{CalcError, CalcResult};
use chrono::{Datelike, Days, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

// `\d` would also accept non-ASCII digits.
static DATE_TEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("valid date text regex")
});

/// Earliest year a `CalendarDate` may carry.
pub const MIN_YEAR: i32 = 1;
/// Latest year a `CalendarDate` may carry.
pub const MAX_YEAR: i32 = 9999;

/// Weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

/// Naive Gregorian calendar day.
///
/// Serialized as the short `dd/mm/yyyy` text; deserialization runs the same
/// validation as [`CalendarDate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from numeric parts, or `None` for impossible days and
    /// years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    fn from_naive(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&date.year())
            .then_some(Self(date))
    }

    /// Parses `dd/mm/yyyy` text read for the input named `field`.
    ///
    /// Leading/trailing whitespace is ignored. Nothing else is normalized:
    /// `1/1/2025`, `2025-01-01` and `31/02/2025` are all rejected.
    ///
    /// # Errors
    /// - `CalcError::InvalidDateFormat` carrying `field` and the raw `text`.
    pub fn parse(text: &str, field: &str) -> CalcResult<Self> {
        let invalid = || CalcError::InvalidDateFormat {
            field: field.to_string(),
            input: text.to_string(),
        };

        let caps = DATE_TEXT_RE.captures(text.trim()).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Weekday index with Monday = 0 and Sunday = 6.
    pub fn weekday_index(self) -> usize {
        self.0.weekday().num_days_from_monday() as usize
    }

    /// Lowercase weekday name from [`WEEKDAY_NAMES`].
    pub fn weekday_name(self) -> &'static str {
        WEEKDAY_NAMES[self.weekday_index()]
    }

    /// Renders `dd/mm/yyyy` without the weekday.
    pub fn to_short_string(self) -> String {
        format!("{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }

    /// Shifts this date by `days` (negative moves backwards).
    ///
    /// # Errors
    /// - `CalcError::DateOutOfRange` when the result falls outside
    ///   `MIN_YEAR..=MAX_YEAR`.
    pub fn add_days(self, days: i64) -> CalcResult<Self> {
        let step = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(step)
        } else {
            self.0.checked_sub_days(step)
        };
        shifted
            .and_then(Self::from_naive)
            .ok_or(CalcError::DateOutOfRange { base: self, days })
    }

    /// Whole days from `self` to `other`; negative when `other` is earlier.
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Adds calendar months, clamping to the last day of the target month.
    pub(crate) fn add_months_clamped(self, months: u32) -> Option<Self> {
        self.0
            .checked_add_months(Months::new(months))
            .and_then(Self::from_naive)
    }

    /// Months elapsed by the year/month fields alone, ignoring the day.
    pub(crate) fn month_index_delta(self, other: Self) -> i64 {
        (i64::from(other.year()) - i64::from(self.year())) * 12
            + (i64::from(other.month()) - i64::from(self.month()))
    }
}

/// Formats a date as `dd/mm/yyyy (weekday)`.
pub fn format_date(date: CalendarDate) -> String {
    format!("{} ({})", date.to_short_string(), date.weekday_name())
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_date(*self))
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_short_string()
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str(), "date")
    }
}
