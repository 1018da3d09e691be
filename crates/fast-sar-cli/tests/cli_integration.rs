//! Integration tests for the fast-sar CLI.
//!
//! These tests verify end-to-end functionality from CSV input through
//! SAR computation to CSV output.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use fast_sar::indicators::sar;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

/// Run the CLI with given arguments and return the output.
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fast-sar"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI, require success and capture stdout as string.
fn run_cli_stdout(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Parse CLI output into records, header excluded.
fn records(csv: &str) -> Vec<csv::StringRecord> {
    csv::Reader::from_reader(csv.as_bytes())
        .records()
        .map(|r| r.expect("well-formed csv row"))
        .collect()
}

/// Parse the value column (last column) of CLI output; empty cells become NaN.
fn value_column(csv: &str) -> Vec<f64> {
    records(csv)
        .iter()
        .map(|record| {
            let cell = record.iter().last().unwrap_or("");
            if cell.is_empty() {
                f64::NAN
            } else {
                cell.parse().expect("numeric cell")
            }
        })
        .collect()
}

// =============================================================================
// SAR
// =============================================================================

#[test]
fn test_sar_four_bar_scenario() {
    let stdout = run_cli_stdout(&["sar", &fixture("four_bars.csv")]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,sar",
            "2024-01-02,",
            "2024-01-03,8",
            "2024-01-04,12",
            "2024-01-05,12"
        ]
    );
}

#[test]
fn test_sar_seed_bar_breach() {
    let stdout = run_cli_stdout(&["sar", &fixture("seed_breach.csv")]);
    let values = value_column(&stdout);
    assert!(values[0].is_nan());
    assert_eq!(&values[1..], &[13.0, 13.0, 8.5]);
}

#[test]
fn test_sar_quoted_dates_round_trip() {
    let stdout = run_cli_stdout(&["sar", &fixture("quoted_dates.csv")]);
    assert!(stdout.starts_with("date,sar\n"));

    let rows = records(&stdout);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 2), "two cells per row");
    let dates: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(dates, ["Jan 2, 2024", "Jan 3, 2024", "Jan 4, 2024", "Jan 5, 2024"]);

    let values = value_column(&stdout);
    assert!(values[0].is_nan());
    assert_eq!(&values[1..], &[8.0, 12.0, 12.0]);
}

#[test]
fn test_sar_matches_library() {
    let stdout = run_cli_stdout(&["sar", &fixture("oscillating.csv")]);
    assert!(stdout.starts_with("date,sar\n"));

    let input = fs::read_to_string(fixtures_dir().join("oscillating.csv")).unwrap();
    let (high, low): (Vec<f64>, Vec<f64>) = input
        .lines()
        .skip(1)
        .map(|line| {
            let cells: Vec<f64> = line.split(',').skip(1).map(|c| c.parse().unwrap()).collect();
            (cells[0], cells[1])
        })
        .unzip();
    let expected = sar(&high, &low).unwrap();

    let actual = value_column(&stdout);
    assert_eq!(actual.len(), expected.len());
    assert!(actual[0].is_nan());
    assert_eq!(actual[1..], expected[1..]);
}

#[test]
fn test_sar_sub_range_rows_aligned() {
    let stdout = run_cli_stdout(&["sar", &fixture("oscillating.csv"), "--start", "5", "--end", "9"]);
    let values = value_column(&stdout);
    assert_eq!(values.len(), 30, "one row per input bar");
    assert!(values[..5].iter().all(|v| v.is_nan()));
    assert!(values[5..=9].iter().all(|v| !v.is_nan()));
    assert!(values[10..].iter().all(|v| v.is_nan()));
}

#[test]
fn test_sar_custom_parameters_change_output() {
    let default = run_cli_stdout(&["sar", &fixture("oscillating.csv")]);
    let slow = run_cli_stdout(&[
        "sar",
        &fixture("oscillating.csv"),
        "--acceleration",
        "0.01",
        "--maximum",
        "0.1",
    ]);
    assert_ne!(default, slow);
}

#[test]
fn test_sar_single_precision() {
    let stdout = run_cli_stdout(&["sar", &fixture("four_bars.csv"), "--single-precision"]);
    let values = value_column(&stdout);
    assert_eq!(&values[1..], &[8.0, 12.0, 12.0]);
}

#[test]
fn test_sar_output_to_file() {
    let path = std::env::temp_dir().join(format!("fast_sar_cli_{}.csv", std::process::id()));
    let path_str = path.display().to_string();

    let output = run_cli(&["sar", &fixture("four_bars.csv"), "-o", &path_str]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "nothing on stdout when writing a file");

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("date,sar\n"));
    assert_eq!(written.lines().count(), 5);
    let _ = fs::remove_file(&path);
}

// =============================================================================
// MINUS_DM & lookback
// =============================================================================

#[test]
fn test_minus_dm_raw() {
    let stdout = run_cli_stdout(&["minus-dm", &fixture("four_bars.csv")]);
    assert!(stdout.starts_with("date,minus_dm_1\n"));
    let values = value_column(&stdout);
    assert!(values[0].is_nan());
    assert_eq!(&values[1..], &[0.0, 1.0, 1.0]);
}

#[test]
fn test_lookback_command() {
    let stdout = run_cli_stdout(&["lookback", "--period", "14"]);
    assert_eq!(stdout, "indicator,lookback\nsar,1\nminus_dm_14,13\n");
}

#[test]
fn test_lookback_zero_period_rejected() {
    let output = run_cli(&["lookback", "--period", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'period'"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_exit_code_missing_file() {
    let output = run_cli(&["sar", "/nonexistent/file.csv"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/file.csv"));
}

#[test]
fn test_missing_low_column() {
    let output = run_cli(&["sar", &fixture("no_low.csv")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'low'"));
}

#[test]
fn test_bad_number_reports_line() {
    let output = run_cli(&["sar", &fixture("bad_number.csv")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 3"));
}

#[test]
fn test_negative_acceleration_rejected() {
    let output = run_cli(&["sar", &fixture("four_bars.csv"), "--acceleration", "-0.1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("acceleration"));
}

#[test]
fn test_end_past_data_rejected() {
    let output = run_cli(&["sar", &fixture("four_bars.csv"), "--end", "10"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn test_huge_end_rejected_with_error_exit() {
    let max = usize::MAX.to_string();
    for end in ["100000000000000", max.as_str()] {
        let output = run_cli(&["sar", &fixture("four_bars.csv"), "--end", end]);
        assert_eq!(output.status.code(), Some(2), "--end {end}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
    }
}

#[test]
fn test_minus_dm_zero_period_rejected() {
    let output = run_cli(&["minus-dm", &fixture("four_bars.csv"), "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'period'"));
}

#[test]
fn test_help_flag() {
    let stdout = run_cli_stdout(&["--help"]);
    assert!(stdout.contains("sar"));
    assert!(stdout.contains("minus-dm"));
}

#[test]
fn test_version_flag() {
    let stdout = run_cli_stdout(&["--version"]);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
