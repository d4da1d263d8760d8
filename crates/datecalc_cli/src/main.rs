//! Command-line front end for `datecalc_core`.
//!
//! # Responsibility
//! - Turn arguments (or stdin lines in `session` mode) into calculation
//!   requests.
//! - Print summaries to stdout and validation messages to stderr.
//!
//! # Invariants
//! - All date rules live in core; this binary only moves text around.

mod cli;
mod session;

use clap::Parser;
use cli::{Cli, Commands, DiffArgs, ShiftArgs};
use datecalc_core::{
    default_log_level, init_logging, CalcResult, CalculationRequest, CalculatorSession,
    LoggingError,
};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT_REJECTED: i32 = 1;
const EXIT_SETUP_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(&cli) {
        eprintln!("Erro: {err}");
        std::process::exit(EXIT_SETUP_ERROR);
    }

    let exit_code = match &cli.command {
        Commands::Diff(args) => run_single(diff_request(args)),
        Commands::End(args) => run_single(end_request(args)),
        Commands::Start(args) => run_single(start_request(args)),
        Commands::Session => run_session(),
    };

    // `exit` skips destructors; push buffered log lines out first.
    log::logger().flush();
    std::process::exit(exit_code);
}

fn setup_logging(cli: &Cli) -> Result<(), LoggingError> {
    let Some(log_dir) = cli.log_dir.as_deref() else {
        return Ok(());
    };
    let log_dir = log_dir.to_str().ok_or_else(|| {
        LoggingError::InvalidDirectory(format!(
            "log_dir must be valid UTF-8, got `{}`",
            log_dir.display()
        ))
    })?;
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, log_dir)
}

pub(crate) fn diff_request(args: &DiffArgs) -> CalcResult<CalculationRequest> {
    CalculationRequest::difference_from_text(&args.start, &args.end, !args.exclusive)
}

pub(crate) fn end_request(args: &ShiftArgs) -> CalcResult<CalculationRequest> {
    CalculationRequest::compute_end_from_text(&args.date, args.days)
}

pub(crate) fn start_request(args: &ShiftArgs) -> CalcResult<CalculationRequest> {
    CalculationRequest::compute_start_from_text(&args.date, args.days)
}

fn run_single(request: CalcResult<CalculationRequest>) -> i32 {
    let mut session = CalculatorSession::new();
    match request.and_then(|request| session.calculate(request)) {
        Ok(outcome) => {
            println!("{}", outcome.summary);
            EXIT_SUCCESS
        }
        Err(err) => {
            eprintln!("Erro: {err}");
            EXIT_INPUT_REJECTED
        }
    }
}

fn run_session() -> i32 {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match session::run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            eprintln!("Erro: {err}");
            EXIT_SETUP_ERROR
        }
    }
}
