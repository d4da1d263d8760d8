//! Span between two dates: day counts and calendar breakdown.
//!
//! # Responsibility
//! - Count days between two dates in inclusive ("de data a data") or
//!   exclusive ("dias completos") mode.
//! - Decompose a span into whole years, months and remainder days using
//!   civil calendar rules.
//!
//! # Invariants
//! - `start + breakdown == end_for_breakdown`, where month steps clamp to
//!   the last valid day of the target month.
//! - Inclusive count is always exclusive count + 1.
//! - Only the precise calendar decomposition exists; no 365/30 divisors.

use crate::model::date::CalendarDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Whole years, months and days between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl PeriodBreakdown {
    /// Computes the civil breakdown from `start` up to `end`.
    ///
    /// Whole months are the largest `k` with `start + k months <= end`.
    /// When `end < start` the arguments are swapped, so the result is always
    /// a non-negative magnitude.
    pub fn between(start: CalendarDate, end: CalendarDate) -> Self {
        let (start, end) = if end < start {
            (end, start)
        } else {
            (start, end)
        };

        let mut total_months = start.month_index_delta(end).max(0);
        let mut anchor = shift_months(start, total_months);
        while total_months > 0 && anchor > end {
            total_months -= 1;
            anchor = shift_months(start, total_months);
        }

        let days = anchor.days_until(end).max(0);
        Self {
            years: u32::try_from(total_months / 12).unwrap_or(u32::MAX),
            // total_months >= 0, so the remainder is in 0..12.
            months: (total_months % 12) as u32,
            days: u32::try_from(days).unwrap_or(u32::MAX),
        }
    }

    /// Applies this breakdown to `start`: years and months as one clamped
    /// month step, then the remainder days.
    pub fn apply_to(&self, start: CalendarDate) -> Option<CalendarDate> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;
        start
            .add_months_clamped(months)?
            .add_days(i64::from(self.days))
            .ok()
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Unit phrases in display order, e.g. `["1 ano", "2 meses"]`.
    ///
    /// Zero units are skipped, except days when years and months are both
    /// zero, so at least one unit is always present.
    pub fn units(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(3);
        if self.years > 0 {
            parts.push(unit(self.years, "ano", "anos"));
        }
        if self.months > 0 {
            parts.push(unit(self.months, "mês", "meses"));
        }
        if self.days > 0 || parts.is_empty() {
            parts.push(unit(self.days, "dia", "dias"));
        }
        parts
    }
}

/// Renders `(1 ano, 2 meses e 3 dias)`.
impl Display for PeriodBreakdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut parts = self.units();
        let last = parts.pop().unwrap_or_default();
        if parts.is_empty() {
            write!(f, "({last})")
        } else {
            write!(f, "({} e {last})", parts.join(", "))
        }
    }
}

fn unit(value: u32, singular: &str, plural: &str) -> String {
    if value == 1 {
        format!("{value} {singular}")
    } else {
        format!("{value} {plural}")
    }
}

fn shift_months(start: CalendarDate, months: i64) -> CalendarDate {
    u32::try_from(months)
        .ok()
        .and_then(|months| start.add_months_clamped(months))
        .unwrap_or(start)
}

/// Result of comparing two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanResult {
    /// `end - start` in whole days.
    pub raw_days: i64,
    /// `raw_days + 1` in inclusive mode, `raw_days` otherwise.
    pub day_count: i64,
    /// Breakdown up to `end + 1` (inclusive) or `end` (exclusive).
    pub breakdown: PeriodBreakdown,
}

/// Computes day counts and breakdown between `start` and `end`.
///
/// Total over any pair of dates; callers reject `end < start` beforehand
/// when that ordering is not allowed. If `end + 1` is not representable in
/// inclusive mode, the breakdown falls back to `end`.
pub fn difference(start: CalendarDate, end: CalendarDate, inclusive: bool) -> SpanResult {
    let raw_days = start.days_until(end);
    let (day_count, end_for_breakdown) = if inclusive {
        (raw_days + 1, end.add_days(1).unwrap_or(end))
    } else {
        (raw_days, end)
    };

    SpanResult {
        raw_days,
        day_count,
        breakdown: PeriodBreakdown::between(start, end_for_breakdown),
    }
}
