//! Core date-calculation engine.
//! This crate owns every date rule; front ends pass primitives in and get
//! strings and records back.

pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use error::{CalcError, CalcResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::date::{format_date, CalendarDate, MAX_YEAR, MIN_YEAR, WEEKDAY_NAMES};
pub use model::period::{difference, PeriodBreakdown, SpanResult};
pub use model::record::{
    CalculationKind, CalculationRecord, HistoryRow, RecordId, HISTORY_COLUMNS,
};
pub use repo::history_repo::{HistoryRepository, InMemoryHistoryRepository};
pub use service::calculator_service::{
    summary_text, validate_day_count, CalculationOutcome, CalculationRequest, CalculatorSession,
    FIELD_DAYS_TO_ADD, FIELD_DAYS_TO_SUBTRACT, FIELD_END_DATE, FIELD_START_DATE,
};
pub use service::export::{
    escape_for_clipboard, export_csv, export_json, export_xlsx, HISTORY_SHEET_NAME,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
