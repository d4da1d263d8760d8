//! Calculation error contract shared by parser, arithmetic and session.
//!
//! # Responsibility
//! - Name every way a calculation can be rejected.
//! - Carry enough context (field label, raw input) for a front end to show
//!   a correction hint without re-parsing.
//!
//! # Invariants
//! - Every variant is a validation failure: recoverable, never retried.
//! - A calculation that returns an error writes nothing to history.

use crate::model::date::CalendarDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Text is not `dd/mm/yyyy` or names an impossible calendar day.
    InvalidDateFormat { field: String, input: String },
    /// End date precedes start date in a difference calculation.
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },
    /// Negative day count where only `0..` is accepted.
    InvalidDayCount { field: String, value: i64 },
    /// Day arithmetic left the representable calendar range.
    DateOutOfRange { base: CalendarDate, days: i64 },
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat { field, input } => write!(
                f,
                "{field}: `{input}` não é uma data válida no formato dd/mm/aaaa"
            ),
            Self::InvalidRange { start, end } => write!(
                f,
                "a data final ({}) não pode ser anterior à data inicial ({})",
                end.to_short_string(),
                start.to_short_string()
            ),
            Self::InvalidDayCount { field, value } => write!(
                f,
                "{field}: quantidade de dias deve ser um inteiro >= 0, recebido {value}"
            ),
            Self::DateOutOfRange { base, days } => write!(
                f,
                "{} deslocada em {days} dia(s) sai do intervalo de datas suportado",
                base.to_short_string()
            ),
        }
    }
}

impl CalcError {
    /// Stable snake_case tag for log lines; never includes user input.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDateFormat { .. } => "invalid_date_format",
            Self::InvalidRange { .. } => "invalid_range",
            Self::InvalidDayCount { .. } => "invalid_day_count",
            Self::DateOutOfRange { .. } => "date_out_of_range",
        }
    }
}

impl Error for CalcError {}
