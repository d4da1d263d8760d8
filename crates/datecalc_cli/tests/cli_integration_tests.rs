#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("datecalc").expect("binary should exist")
}

// ============================================================================
// One-shot calculations
// ============================================================================

#[test]
fn diff_counts_both_dates_by_default() {
    cmd()
        .args(["diff", "01/01/2025", "10/01/2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total de dias (incluindo as duas datas): 10 (10 dias)",
        ));
}

#[test]
fn diff_exclusive_counts_complete_days() {
    cmd()
        .args(["diff", "01/01/2025", "10/01/2025", "--exclusive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dias completos entre as datas: 9"));
}

#[test]
fn end_and_start_are_inverse() {
    cmd()
        .args(["end", "01/01/2025", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data final: 10/01/2025 (sexta-feira)"));

    cmd()
        .args(["start", "10/01/2025", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Data inicial: 01/01/2025 (quarta-feira)",
        ));
}

#[test]
fn impossible_date_exits_with_input_error() {
    cmd()
        .args(["diff", "31/02/2025", "10/03/2025"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Data inicial: `31/02/2025`"));
}

#[test]
fn reversed_range_exits_with_input_error() {
    cmd()
        .args(["diff", "10/01/2025", "01/01/2025"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("não pode ser anterior"));
}

#[test]
fn negative_day_count_exits_with_input_error() {
    cmd()
        .args(["end", "01/01/2025", "-5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Dias a adicionar"));
}

#[test]
fn shift_past_year_9999_exits_with_input_error() {
    cmd()
        .args(["end", "31/12/9999", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("sai do intervalo de datas suportado"));
}

#[test]
fn relative_log_dir_is_a_setup_error() {
    cmd()
        .args(["--log-dir", "logs", "diff", "01/01/2025", "10/01/2025"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("absolute"));
}

#[test]
fn log_dir_receives_rotated_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    cmd()
        .arg("--log-dir")
        .arg(&log_dir)
        .args(["--log-level", "info", "end", "01/01/2025", "1"])
        .assert()
        .success();

    let has_log = fs::read_dir(&log_dir)
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("datecalc"));
    assert!(has_log, "expected a datecalc log file in {}", log_dir.display());
}

// ============================================================================
// Session mode
// ============================================================================

#[test]
fn session_exports_history_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let export_path = temp_dir.path().join("historico.csv");
    let script = format!(
        "diff 01/01/2025 10/01/2025\nend 01/01/2025 9\nexport csv --output {}\nquit\n",
        export_path.display()
    );

    cmd()
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Histórico exportado para"));

    let csv = fs::read_to_string(&export_path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Tipo,Data inicial,Data final,Qtd dias,Resumo");
    assert_eq!(
        lines[1],
        "Diferença entre datas (de data a data),01/01/2025,10/01/2025,10,10 dia(s) de data a data"
    );
    assert_eq!(
        lines[2],
        "Data final (inicial + dias),01/01/2025,10/01/2025,9,Final: 10/01/2025"
    );
}

#[test]
fn session_json_export_goes_to_stdout() {
    cmd()
        .arg("session")
        .write_stdin("start 10/01/2025 9\nexport json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Resumo\": \"Inicial: 01/01/2025\""));
}

#[test]
fn session_exports_history_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let export_path = temp_dir.path().join("historico.xlsx");
    let script = format!(
        "diff 01/01/2025 10/01/2025\nexport xlsx -o {}\n",
        export_path.display()
    );

    cmd()
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Histórico exportado para"));

    let bytes = fs::read(&export_path).unwrap();
    assert!(bytes.starts_with(b"PK"), "expected a zip package");
}

#[test]
fn session_survives_unwritable_export_path() {
    cmd()
        .arg("session")
        .write_stdin("end 01/01/2025 1\nexport csv --output /nonexistent_dir/x.csv\nhistory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total de registros: 1"))
        .stderr(predicate::str::contains("Erro:"));
}
