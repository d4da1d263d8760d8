//! Calculation history contracts and in-memory implementation.
//!
//! # Responsibility
//! - Keep completed calculation records in arrival order.
//! - Expose a read-only snapshot to rendering/export callers.
//!
//! # Invariants
//! - Records are only appended; individual records are never edited or
//!   removed.
//! - `clear()` drops everything at once and is idempotent.
//! - History lives only as long as its owner; nothing is written to disk.

use crate::model::record::{CalculationRecord, HistoryRow};

/// Repository interface for session history.
pub trait HistoryRepository {
    fn append(&mut self, record: CalculationRecord);
    fn snapshot(&self) -> &[CalculationRecord];
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Export rows in history order.
    fn rows(&self) -> Vec<HistoryRow> {
        self.snapshot()
            .iter()
            .map(CalculationRecord::to_row)
            .collect()
    }
}

/// Volatile, `Vec`-backed history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryRepository {
    records: Vec<CalculationRecord>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    fn snapshot(&self) -> &[CalculationRecord] {
        &self.records
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}
