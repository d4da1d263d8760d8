//! Calculator session use-case service.
//!
//! # Responsibility
//! - Dispatch the three calculation modes (difference, end date, start date).
//! - Build the multi-line summary and the history record for each success.
//! - Own the session history and the last successful summary.
//!
//! # Invariants
//! - Every success appends exactly one record; every failure appends none.
//! - `end < start` is rejected before any span is computed.
//! - Day counts reach date arithmetic only after the `>= 0` check.
//! - Summary lines are `Label: value` joined by `\n`; no `\r` is emitted.

use crate::error::{CalcError, CalcResult};
use crate::model::date::{format_date, CalendarDate};
use crate::model::period::{difference, PeriodBreakdown};
use crate::model::record::{CalculationKind, CalculationRecord, HistoryRow};
use crate::repo::history_repo::{HistoryRepository, InMemoryHistoryRepository};
use log::{debug, info, warn};

/// Field label for the start date input.
pub const FIELD_START_DATE: &str = "Data inicial";
/// Field label for the end date input.
pub const FIELD_END_DATE: &str = "Data final";
/// Field label for the day count added to a start date.
pub const FIELD_DAYS_TO_ADD: &str = "Dias a adicionar";
/// Field label for the day count subtracted from an end date.
pub const FIELD_DAYS_TO_SUBTRACT: &str = "Dias a subtrair";

/// One calculation request; each variant carries only what its mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationRequest {
    /// Days between two dates.
    Difference {
        start: CalendarDate,
        end: CalendarDate,
        inclusive: bool,
    },
    /// `start + days`.
    ComputeEnd { start: CalendarDate, days: i64 },
    /// `end - days`.
    ComputeStart { end: CalendarDate, days: i64 },
}

impl CalculationRequest {
    /// Builds a difference request from two `dd/mm/yyyy` tokens.
    pub fn difference_from_text(
        start_text: &str,
        end_text: &str,
        inclusive: bool,
    ) -> CalcResult<Self> {
        Ok(Self::Difference {
            start: CalendarDate::parse(start_text, FIELD_START_DATE)?,
            end: CalendarDate::parse(end_text, FIELD_END_DATE)?,
            inclusive,
        })
    }

    /// Builds an end-date request from a `dd/mm/yyyy` token and a day count.
    pub fn compute_end_from_text(start_text: &str, days: i64) -> CalcResult<Self> {
        Ok(Self::ComputeEnd {
            start: CalendarDate::parse(start_text, FIELD_START_DATE)?,
            days,
        })
    }

    /// Builds a start-date request from a `dd/mm/yyyy` token and a day count.
    pub fn compute_start_from_text(end_text: &str, days: i64) -> CalcResult<Self> {
        Ok(Self::ComputeStart {
            end: CalendarDate::parse(end_text, FIELD_END_DATE)?,
            days,
        })
    }

    pub fn kind(&self) -> CalculationKind {
        match self {
            Self::Difference {
                inclusive: true, ..
            } => CalculationKind::DifferenceInclusive,
            Self::Difference {
                inclusive: false, ..
            } => CalculationKind::DifferenceExclusive,
            Self::ComputeEnd { .. } => CalculationKind::ComputeEnd,
            Self::ComputeStart { .. } => CalculationKind::ComputeStart,
        }
    }
}

/// Result of one successful calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationOutcome {
    pub start: CalendarDate,
    pub end: CalendarDate,
    /// Counted days (inclusive/exclusive per mode) or the requested shift.
    pub day_count: i64,
    pub breakdown: PeriodBreakdown,
    /// Multi-line `Label: value` text for display and copy.
    pub summary: String,
    /// The record appended to history.
    pub record: CalculationRecord,
}

/// Session-scoped calculator: one per user session, no shared state.
pub struct CalculatorSession<R: HistoryRepository = InMemoryHistoryRepository> {
    history: R,
    last_summary: Option<String>,
}

impl CalculatorSession<InMemoryHistoryRepository> {
    /// Creates a session with empty in-memory history.
    pub fn new() -> Self {
        Self::with_repository(InMemoryHistoryRepository::new())
    }
}

impl Default for CalculatorSession<InMemoryHistoryRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: HistoryRepository> CalculatorSession<R> {
    /// Creates a session over the provided history implementation.
    pub fn with_repository(history: R) -> Self {
        Self {
            history,
            last_summary: None,
        }
    }

    /// Runs one calculation and records it on success.
    ///
    /// # Contract
    /// - Difference: fails with `InvalidRange` when `end < start`.
    /// - Compute end/start: fails with `InvalidDayCount` when `days < 0`.
    /// - Compute end/start: breakdown uses exclusive semantics.
    /// - On any error history and `last_summary` are left untouched.
    pub fn calculate(&mut self, request: CalculationRequest) -> CalcResult<CalculationOutcome> {
        let kind = request.kind();
        match evaluate(request) {
            Ok(outcome) => {
                info!(
                    "event=calc_ok module=service status=ok kind={} day_count={} history_len={}",
                    kind.code(),
                    outcome.day_count,
                    self.history.len() + 1
                );
                self.history.append(outcome.record.clone());
                self.last_summary = Some(outcome.summary.clone());
                Ok(outcome)
            }
            Err(err) => {
                warn!(
                    "event=calc_rejected module=service status=error kind={} reason={}",
                    kind.code(),
                    err.code()
                );
                Err(err)
            }
        }
    }

    /// Ordered read-only view of this session's records.
    pub fn history(&self) -> &[CalculationRecord] {
        self.history.snapshot()
    }

    /// History as export rows in column order.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history.rows()
    }

    /// Empties history. Does not touch `last_summary`.
    pub fn clear_history(&mut self) {
        let dropped = self.history.len();
        self.history.clear();
        info!("event=history_clear module=service status=ok dropped={dropped}");
    }

    /// Summary of the most recent successful calculation, if any.
    pub fn last_summary(&self) -> Option<&str> {
        self.last_summary.as_deref()
    }
}

fn evaluate(request: CalculationRequest) -> CalcResult<CalculationOutcome> {
    let kind = request.kind();
    match request {
        CalculationRequest::Difference {
            start,
            end,
            inclusive,
        } => {
            if end < start {
                return Err(CalcError::InvalidRange { start, end });
            }
            let span = difference(start, end, inclusive);
            let record_summary = if inclusive {
                format!("{} dia(s) de data a data", span.day_count)
            } else {
                format!("{} dia(s) entre as datas", span.day_count)
            };
            Ok(build_outcome(
                kind,
                start,
                end,
                span.day_count,
                span.breakdown,
                record_summary,
            ))
        }
        CalculationRequest::ComputeEnd { start, days } => {
            validate_day_count(days, FIELD_DAYS_TO_ADD)?;
            let end = start.add_days(days)?;
            let breakdown = difference(start, end, false).breakdown;
            let record_summary = format!("Final: {}", end.to_short_string());
            Ok(build_outcome(
                kind,
                start,
                end,
                days,
                breakdown,
                record_summary,
            ))
        }
        CalculationRequest::ComputeStart { end, days } => {
            validate_day_count(days, FIELD_DAYS_TO_SUBTRACT)?;
            let start = end.add_days(-days)?;
            let breakdown = difference(start, end, false).breakdown;
            let record_summary = format!("Inicial: {}", start.to_short_string());
            Ok(build_outcome(
                kind,
                start,
                end,
                days,
                breakdown,
                record_summary,
            ))
        }
    }
}

/// Rejects negative day counts before they reach date arithmetic.
pub fn validate_day_count(days: i64, field: &str) -> CalcResult<()> {
    if days < 0 {
        debug!("event=day_count_rejected module=service status=error");
        return Err(CalcError::InvalidDayCount {
            field: field.to_string(),
            value: days,
        });
    }
    Ok(())
}

fn build_outcome(
    kind: CalculationKind,
    start: CalendarDate,
    end: CalendarDate,
    day_count: i64,
    breakdown: PeriodBreakdown,
    record_summary: String,
) -> CalculationOutcome {
    let summary = summary_text(kind, start, end, day_count, breakdown);
    let record = CalculationRecord::new(
        kind,
        Some(start),
        Some(end),
        Some(day_count),
        record_summary,
    );
    CalculationOutcome {
        start,
        end,
        day_count,
        breakdown,
        summary,
        record,
    }
}

/// Renders the multi-line result text for one calculation.
pub fn summary_text(
    kind: CalculationKind,
    start: CalendarDate,
    end: CalendarDate,
    day_count: i64,
    breakdown: PeriodBreakdown,
) -> String {
    let counted = format!("{day_count} {breakdown}");
    let lines = match kind {
        CalculationKind::DifferenceInclusive => [
            "Cálculo: Diferença entre datas (de data a data)".to_string(),
            format!("Data inicial: {}", format_date(start)),
            format!("Data final: {}", format_date(end)),
            format!("Total de dias (incluindo as duas datas): {counted}"),
        ],
        CalculationKind::DifferenceExclusive => [
            "Cálculo: Diferença entre datas (dias completos)".to_string(),
            format!("Data inicial: {}", format_date(start)),
            format!("Data final: {}", format_date(end)),
            format!("Dias completos entre as datas: {counted}"),
        ],
        CalculationKind::ComputeEnd => [
            "Cálculo: Data final (data inicial + dias)".to_string(),
            format!("Data inicial: {}", format_date(start)),
            format!("Dias adicionados: {counted}"),
            format!("Data final: {}", format_date(end)),
        ],
        CalculationKind::ComputeStart => [
            "Cálculo: Data inicial (data final - dias)".to_string(),
            format!("Data final: {}", format_date(end)),
            format!("Dias subtraídos: {counted}"),
            format!("Data inicial: {}", format_date(start)),
        ],
    };
    lines.join("\n")
}
