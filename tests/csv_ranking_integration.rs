//! Integration tests for ranking CSV files end to end.
//!
//! These tests verify the full flow:
//! 1. CsvTableReader loads the decision table
//! 2. RankAlternativesHandler validates inputs and runs TOPSIS
//! 3. CsvTableWriter persists the table with score and rank columns
//!
//! The last section drives the `topsis` binary to check exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use tempfile::{tempdir, TempDir};

use topsis_rank::adapters::{CsvTableReader, CsvTableWriter};
use topsis_rank::application::{RankAlternativesCommand, RankAlternativesHandler};
use topsis_rank::config::OutputConfig;
use topsis_rank::domain::foundation::ErrorCode;

// =============================================================================
// Test Infrastructure
// =============================================================================

const PHONES_CSV: &str = "\
Model,Price,Storage,Camera,Looks
M1,250,16,12,5
M2,200,16,8,3
M3,300,32,16,4
M4,275,32,8,4
M5,225,16,16,2
";

const GOLDEN_SCORES: [f64; 5] = [
    0.25244704365851073,
    0.33851277168245947,
    0.6614872283175406,
    0.48300779397159294,
    0.5829871350835378,
];

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempdir().expect("temp dir"),
        }
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write input");
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn handler(input: &Path, output: &Path) -> RankAlternativesHandler {
    RankAlternativesHandler::new(
        Arc::new(CsvTableReader::new(input)),
        Arc::new(CsvTableWriter::new(output)),
    )
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).expect("open result");
    reader
        .records()
        .map(|r| r.expect("record").iter().map(str::to_string).collect())
        .collect()
}

// =============================================================================
// Handler + CSV adapters
// =============================================================================

#[test]
fn golden_fixture_round_trip() {
    let ws = Workspace::new();
    let input = ws.file("phones.csv", PHONES_CSV);
    let output = ws.path("result.csv");

    let result = handler(&input, &output)
        .handle(RankAlternativesCommand::new("0.25,0.25,0.25,0.25", "+,+,+,-"))
        .expect("ranking succeeds");

    assert_eq!(result.outcome.ranks, vec![5, 4, 1, 3, 2]);

    let mut reader = csv::Reader::from_path(&output).expect("open result");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(
        headers,
        vec!["Model", "Price", "Storage", "Camera", "Looks", "Topsis Score", "Rank"]
    );

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 5);
    for (row, expected) in rows.iter().zip(GOLDEN_SCORES) {
        let score: f64 = row[5].parse().expect("numeric score");
        assert!((score - expected).abs() < 1e-12, "{} != {}", score, expected);
    }
    let ranks: Vec<&str> = rows.iter().map(|r| r[6].as_str()).collect();
    assert_eq!(ranks, vec!["5", "4", "1", "3", "2"]);

    // Input cells are copied through untouched.
    assert_eq!(rows[0][..5], ["M1", "250", "16", "12", "5"]);
}

#[test]
fn fixed_precision_output() {
    let ws = Workspace::new();
    let input = ws.file("phones.csv", PHONES_CSV);
    let output = ws.path("result.csv");

    handler(&input, &output)
        .with_output_config(OutputConfig {
            score_precision: Some(4),
            ..OutputConfig::default()
        })
        .handle(RankAlternativesCommand::new("1,1,1,1", "+,+,+,-"))
        .expect("ranking succeeds");

    let rows = read_rows(&output);
    assert_eq!(rows[2][5], "0.6615");
    assert_eq!(rows[0][5], "0.2524");
}

#[test]
fn missing_input_writes_nothing() {
    let ws = Workspace::new();
    let output = ws.path("result.csv");

    let err = handler(&ws.path("absent.csv"), &output)
        .handle(RankAlternativesCommand::new("1,1", "+,+"))
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::FileNotFound);
    assert!(!output.exists());
}

#[test]
fn non_numeric_cell_writes_nothing() {
    let ws = Workspace::new();
    let input = ws.file("bad.csv", "Name,A,B\nx,1,2\ny,three,4\n");
    let output = ws.path("result.csv");

    let err = handler(&input, &output)
        .handle(RankAlternativesCommand::new("1,1", "+,+"))
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::ParseError);
    assert!(!output.exists());
}

#[test]
fn ragged_file_is_read_error() {
    let ws = Workspace::new();
    let input = ws.file("ragged.csv", "Name,A,B\nx,1,2\ny,3\n");

    let err = handler(&input, &ws.path("result.csv"))
        .handle(RankAlternativesCommand::new("1,1", "+,+"))
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::FileReadError);
}

#[test]
fn zero_column_is_degenerate() {
    let ws = Workspace::new();
    let input = ws.file("zeros.csv", "Name,A,B\nx,1,0\ny,3,0\n");

    let err = handler(&input, &ws.path("result.csv"))
        .handle(RankAlternativesCommand::new("1,1", "+,+"))
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::DegenerateColumn);
}

// =============================================================================
// Binary
// =============================================================================

fn topsis(args: &[&str], ws: &Workspace) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_topsis"))
        .args(args)
        .current_dir(ws.dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run topsis")
}

#[test]
fn binary_ranks_file_and_reports_success() {
    let ws = Workspace::new();
    let input = ws.file("phones.csv", PHONES_CSV);
    let output = ws.path("result.csv");

    let out = topsis(
        &[
            input.to_str().unwrap(),
            "1,1,1,2",
            "-,+,+,-",
            output.to_str().unwrap(),
        ],
        &ws,
    );

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("TOPSIS Score and Rank Updated and saved to the output file"));
    assert_eq!(read_rows(&output).len(), 5);
}

#[test]
fn binary_wrong_argument_count_exits_one() {
    let ws = Workspace::new();
    let out = topsis(&["only.csv", "1,1"], &ws);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}

#[test]
fn binary_validation_failure_exits_one() {
    let ws = Workspace::new();
    let input = ws.file("phones.csv", PHONES_CSV);
    let output = ws.path("result.csv");

    let out = topsis(
        &[input.to_str().unwrap(), "1,1,1", "+,+,+,-", output.to_str().unwrap()],
        &ws,
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr)
        .contains("The number of weights, impacts, and criteria columns must be the same."));
    assert!(!output.exists());
}
