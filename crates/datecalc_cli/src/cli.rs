use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// History export format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header line
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// Excel workbook with a single "Histórico" sheet (requires --output)
    Xlsx,
}

#[derive(Parser, Debug)]
#[command(name = "datecalc")]
#[command(version, about = "Calculadora de datas: dias entre datas, data final e data inicial")]
#[command(long_about = "Date calculator for dd/mm/yyyy dates.\n\n\
    Exit codes:\n  \
    0 - Calculation succeeded\n  \
    1 - Input rejected (bad date, reversed range, negative day count)\n  \
    2 - Usage or logging setup error")]
pub struct Cli {
    /// Log level when file logging is enabled
    #[arg(long, global = true, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,

    /// Absolute directory for rotated log files (logging is off without it)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Days between two dates (both dates counted unless --exclusive)
    Diff(DiffArgs),

    /// End date = start date + days
    End(ShiftArgs),

    /// Start date = end date - days
    Start(ShiftArgs),

    /// Read one command per line from stdin, keeping history for the session
    Session,
}

#[derive(Args, Debug, Clone)]
pub struct DiffArgs {
    /// Start date (dd/mm/yyyy)
    pub start: String,

    /// End date (dd/mm/yyyy)
    pub end: String,

    /// Count only complete days between the dates
    #[arg(long)]
    pub exclusive: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShiftArgs {
    /// Reference date (dd/mm/yyyy)
    pub date: String,

    /// Non-negative number of days
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

/// One line of input in `session` mode.
#[derive(Parser, Debug)]
#[command(name = "datecalc-session", no_binary_name = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Days between two dates
    Diff(DiffArgs),

    /// End date = start date + days
    End(ShiftArgs),

    /// Start date = end date - days
    Start(ShiftArgs),

    /// Show the calculations made in this session
    History,

    /// Export the session history
    Export(ExportArgs),

    /// Forget the session history
    Clear,

    /// Print the last successful result again
    Last,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
