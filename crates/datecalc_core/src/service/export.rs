//! History export and copy helpers.
//!
//! # Responsibility
//! - Render history rows as CSV, JSON or an Excel workbook for download.
//! - Escape a summary for embedding in a script string literal (copy button).
//!
//! # Invariants
//! - CSV header and cell order always follow `HISTORY_COLUMNS`.
//! - Output is deterministic for the same rows.
//! - The workbook has a single sheet named `HISTORY_SHEET_NAME`.

use crate::model::record::{HistoryRow, HISTORY_COLUMNS};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::fmt::Write;

/// Worksheet name used by [`export_xlsx`].
pub const HISTORY_SHEET_NAME: &str = "Histórico";
const DAY_COUNT_COLUMN: u16 = 3;

/// Renders rows as CSV with a header line and `\n` line endings.
///
/// Cells containing `,`, `"`, `\n` or `\r` are quoted with inner quotes
/// doubled.
pub fn export_csv(rows: &[HistoryRow]) -> String {
    let mut out = String::new();
    push_csv_line(&mut out, HISTORY_COLUMNS);
    for row in rows {
        push_csv_line(&mut out, row.cells());
    }
    out
}

/// Renders rows as a pretty-printed JSON array keyed by column name.
pub fn export_json(rows: &[HistoryRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

/// Renders rows as an `.xlsx` workbook: bold header row, one row per record.
///
/// `Qtd dias` cells holding an integer are written as numbers; anything else
/// is written as text. Empty cells are left blank.
///
/// # Errors
/// - `XlsxError` from the workbook writer.
pub fn export_xlsx(rows: &[HistoryRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(HISTORY_SHEET_NAME)?;

    for (col, title) in (0u16..).zip(HISTORY_COLUMNS) {
        worksheet.write_string_with_format(0, col, title, &header_format)?;
    }
    for (row_index, row) in (1u32..).zip(rows) {
        for (col, cell) in (0u16..).zip(row.cells()) {
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<i64>() {
                Ok(count) if col == DAY_COUNT_COLUMN => {
                    worksheet.write_number(row_index, col, count as f64)?;
                }
                _ => {
                    worksheet.write_string(row_index, col, cell)?;
                }
            }
        }
    }

    workbook.save_to_buffer()
}

/// Escapes text for a JavaScript template literal: `\`, `` ` `` and newline
/// are escaped, carriage returns are dropped.
pub fn escape_for_clipboard(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

fn push_csv_line(out: &mut String, cells: [&str; 5]) {
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        if cell.contains([',', '"', '\n', '\r']) {
            let _ = write!(out, "\"{}\"", cell.replace('"', "\"\""));
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}
