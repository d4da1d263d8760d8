//! Line-oriented interactive session over one `CalculatorSession`.
//!
//! # Responsibility
//! - Parse each input line as a session command.
//! - Keep history for the lifetime of the loop; it is dropped on exit.
//!
//! # Invariants
//! - A rejected line never ends the session, including a failed export write.
//! - Results go to `out`, diagnostics go to `err_out`.

use crate::cli::{ExportArgs, ExportFormat, SessionCommand, SessionLine};
use crate::{diff_request, end_request, start_request};
use clap::Parser;
use datecalc_core::{
    export_csv, export_json, export_xlsx, CalcResult, CalculationRequest, CalculatorSession, HistoryRow,
};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

/// Runs commands from `input` until end of input or `quit`.
///
/// # Errors
/// - Returns I/O errors from reading input or writing to `out`/`err_out`.
///   Export file failures are reported on `err_out` and the loop goes on.
pub fn run<R, W, E>(input: R, out: &mut W, err_out: &mut E) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut session = CalculatorSession::new();

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = match SessionLine::try_parse_from(trimmed.split_whitespace()) {
            Ok(parsed) => parsed.command,
            Err(parse_err) => {
                write!(err_out, "{parse_err}")?;
                continue;
            }
        };

        match command {
            SessionCommand::Diff(args) => {
                calculate(&mut session, diff_request(&args), out, err_out)?;
            }
            SessionCommand::End(args) => {
                calculate(&mut session, end_request(&args), out, err_out)?;
            }
            SessionCommand::Start(args) => {
                calculate(&mut session, start_request(&args), out, err_out)?;
            }
            SessionCommand::History => print_history(&session.history_rows(), out)?,
            SessionCommand::Export(args) => {
                export(&session.history_rows(), &args, out, err_out)?;
            }
            SessionCommand::Clear => {
                session.clear_history();
                writeln!(out, "Histórico limpo com sucesso!")?;
            }
            SessionCommand::Last => match session.last_summary() {
                Some(summary) => writeln!(out, "{summary}")?,
                None => writeln!(out, "Nenhum resultado ainda.")?,
            },
            SessionCommand::Quit => break,
        }
    }

    debug!("event=session_end module=cli status=ok");
    Ok(())
}

fn calculate<W: Write, E: Write>(
    session: &mut CalculatorSession,
    request: CalcResult<CalculationRequest>,
    out: &mut W,
    err_out: &mut E,
) -> io::Result<()> {
    match request.and_then(|request| session.calculate(request)) {
        Ok(outcome) => writeln!(out, "{}\n", outcome.summary),
        Err(err) => writeln!(err_out, "Erro: {err}"),
    }
}

fn print_history<W: Write>(rows: &[HistoryRow], out: &mut W) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "Nenhum cálculo registrado ainda.");
    }
    writeln!(out, "Total de registros: {}", rows.len())?;
    for (index, row) in rows.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, row.cells().join(" | "))?;
    }
    Ok(())
}

fn export<W: Write, E: Write>(
    rows: &[HistoryRow],
    args: &ExportArgs,
    out: &mut W,
    err_out: &mut E,
) -> io::Result<()> {
    let bytes = match args.format {
        ExportFormat::Csv => export_csv(rows).into_bytes(),
        ExportFormat::Json => match export_json(rows) {
            Ok(json) => (json + "\n").into_bytes(),
            Err(err) => return writeln!(err_out, "Erro: {err}"),
        },
        ExportFormat::Xlsx if args.output.is_none() => {
            return writeln!(err_out, "Erro: exportação xlsx requer --output <arquivo>");
        }
        ExportFormat::Xlsx => match export_xlsx(rows) {
            Ok(workbook) => workbook,
            Err(err) => return writeln!(err_out, "Erro: {err}"),
        },
    };

    match &args.output {
        Some(path) => match std::fs::write(path, bytes) {
            Ok(()) => writeln!(out, "Histórico exportado para {}", path.display()),
            Err(err) => {
                warn!("event=export_write module=cli status=error kind={:?}", err.kind());
                writeln!(
                    err_out,
                    "Erro: não foi possível exportar para {}: {err}",
                    path.display()
                )
            }
        },
        None => out.write_all(&bytes),
    }
}
