//! End-to-end runs of the `sparse-matrix` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_cli(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sparse-matrix"))
        .args(args)
        .current_dir(workdir)
        .env("SPARSE_MATRIX_LOG", "off")
        .env("SPARSE_MATRIX_OUTPUT_DIR", workdir.join("results"))
        .output()
        .expect("failed to launch binary")
}

fn setup(left: &str, right: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), left).unwrap();
    fs::write(dir.path().join("b.txt"), right).unwrap();
    dir
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["add", "a.txt"]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("add, subtract, multiply"));
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_unknown_operation_does_not_load_files() {
    // The input files do not exist; only the operation name is reported
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["divide", "a.txt", "b.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid operation"));
    assert!(!stderr.contains("a.txt"));
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_add_writes_operation_named_result() {
    let dir = setup(
        "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 5)\n",
        "rows=2\ncols=2\n(0, 0, -1)\n(0, 1, 2)\n",
    );
    let output = run_cli(dir.path(), &["add", "a.txt", "b.txt"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let result = fs::read_to_string(dir.path().join("results/sample_results_add.txt")).unwrap();
    assert_eq!(result, "rows=2\ncols=2\n(0, 1, 2)\n(1, 1, 5)\n");
}

#[test]
fn test_multiply_writes_result() {
    let dir = setup(
        "rows=1\ncols=2\n(0, 0, 2)\n(0, 1, 3)\n",
        "rows=2\ncols=1\n(0, 0, 4)\n(1, 0, 5)\n",
    );
    let output = run_cli(dir.path(), &["multiply", "a.txt", "b.txt"]);

    assert!(output.status.success());
    let result =
        fs::read_to_string(dir.path().join("results/sample_results_multiply.txt")).unwrap();
    assert_eq!(result, "rows=1\ncols=1\n(0, 0, 23)\n");
}

#[test]
fn test_dimension_mismatch_reports_one_line_and_no_output() {
    let dir = setup("rows=2\ncols=2\n", "rows=3\ncols=2\n");
    let output = run_cli(dir.path(), &["subtract", "a.txt", "b.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end().lines().count(), 1, "{stderr}");
    assert!(stderr.contains("subtraction"));
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_format_error_reports_path_and_cause() {
    let dir = setup("rows=3\ncols=3\n(1,2)\n", "rows=3\ncols=3\n");
    let output = run_cli(dir.path(), &["add", "a.txt", "b.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end().lines().count(), 1, "{stderr}");
    assert!(stderr.contains("a.txt"));
    assert!(stderr.contains("expected 3 comma-separated fields, found 2"));
    assert!(!dir.path().join("results").exists());
}
