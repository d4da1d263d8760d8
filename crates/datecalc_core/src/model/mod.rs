//! Domain values for date calculations.
//!
//! # Responsibility
//! - Define calendar dates, spans and history records used by the session.
//! - Keep every date-rule decision (format, weekday, month clamping) here.
//!
//! # Invariants
//! - All dates are naive proleptic-Gregorian days; there is no time zone.
//! - Values are immutable once constructed.

pub mod date;
pub mod period;
pub mod record;
