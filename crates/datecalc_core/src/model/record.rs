//! Calculation history record.
//!
//! # Responsibility
//! - Define the structured result of one completed calculation.
//! - Provide the tabular export view in the fixed column order.
//!
//! # Invariants
//! - A record is built once per successful calculation and never mutated.
//! - `id` is a fresh v4 UUID, unique within and across sessions.
//! - Export rows always follow `Tipo, Data inicial, Data final, Qtd dias, Resumo`.

use crate::model::date::CalendarDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a history record.
pub type RecordId = Uuid;

/// Export column headers, in order.
pub const HISTORY_COLUMNS: [&str; 5] = ["Tipo", "Data inicial", "Data final", "Qtd dias", "Resumo"];

/// Which of the four calculations produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    /// Day count counting both endpoints.
    DifferenceInclusive,
    /// Day count of complete days between the endpoints.
    DifferenceExclusive,
    /// End date from start date plus days.
    ComputeEnd,
    /// Start date from end date minus days.
    ComputeStart,
}

impl CalculationKind {
    /// Human label shown in the history table `Tipo` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::DifferenceInclusive => "Diferença entre datas (de data a data)",
            Self::DifferenceExclusive => "Diferença entre datas (dias completos)",
            Self::ComputeEnd => "Data final (inicial + dias)",
            Self::ComputeStart => "Data inicial (final - dias)",
        }
    }

    /// Stable snake_case tag used in log lines.
    pub fn code(self) -> &'static str {
        match self {
            Self::DifferenceInclusive => "difference_inclusive",
            Self::DifferenceExclusive => "difference_exclusive",
            Self::ComputeEnd => "compute_end",
            Self::ComputeStart => "compute_start",
        }
    }
}

/// One completed calculation as kept in session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: RecordId,
    pub kind: CalculationKind,
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
    pub day_count: Option<i64>,
    /// Short one-line result, e.g. `10 dia(s) de data a data`.
    pub summary: String,
}

impl CalculationRecord {
    /// Builds a record with a generated ID.
    pub fn new(
        kind: CalculationKind,
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
        day_count: Option<i64>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            start,
            end,
            day_count,
            summary: summary.into(),
        }
    }

    /// Export view with empty strings for absent fields.
    pub fn to_row(&self) -> HistoryRow {
        HistoryRow {
            kind: self.kind.label().to_string(),
            start: self.start.map(CalendarDate::to_short_string).unwrap_or_default(),
            end: self.end.map(CalendarDate::to_short_string).unwrap_or_default(),
            day_count: self.day_count.map(|n| n.to_string()).unwrap_or_default(),
            summary: self.summary.clone(),
        }
    }
}

/// Flat, string-only row for table rendering and CSV/JSON export.
///
/// Field order matches [`HISTORY_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    #[serde(rename = "Tipo")]
    pub kind: String,
    #[serde(rename = "Data inicial")]
    pub start: String,
    #[serde(rename = "Data final")]
    pub end: String,
    #[serde(rename = "Qtd dias")]
    pub day_count: String,
    #[serde(rename = "Resumo")]
    pub summary: String,
}

impl HistoryRow {
    /// Cell values in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.kind.as_str(),
            self.start.as_str(),
            self.end.as_str(),
            self.day_count.as_str(),
            self.summary.as_str(),
        ]
    }
}
