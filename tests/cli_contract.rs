//! Tests for the binary's process surface: the exact stdout success line,
//! the WARNING/ERROR stderr routing, and the exit codes.
//!
//! These spawn the compiled binary against a fixture database, so a change
//! to the printed contract fails here even when the library behaves.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use duckdb::Connection;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Creates a database with a populated crosswalk table and an empty one.
fn fixture_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("kidsights_local.duckdb");
    let conn = Connection::open(&path).expect("Failed to create fixture database");

    conn.execute_batch(
        "CREATE TABLE geo_zip_to_puma (zip VARCHAR, puma VARCHAR, weight DOUBLE);
         INSERT INTO geo_zip_to_puma VALUES
             ('68022', '3100801', 0.42),
             ('68102', '3100901', 1.0),
             ('68105', '3100901', 0.77);
         CREATE TABLE empty_crosswalk (zip VARCHAR, county VARCHAR);",
    )
    .expect("Failed to populate fixture database");

    drop(conn);
    path
}

/// Runs the binary with the given arguments.
fn run_exporter(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kidsights-export"))
        .args(args)
        .output()
        .expect("Failed to spawn kidsights-export")
}

#[test]
fn test_success_line_and_exit_code_zero() {
    let dir = TempDir::new().unwrap();
    let db = fixture_db(&dir);
    let out = dir.path().join("temp.feather");

    let output = run_exporter(&[
        "--table",
        "geo_zip_to_puma",
        "--output",
        out.to_str().unwrap(),
        "--db",
        db.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!(
            "SUCCESS: Exported 3 rows from geo_zip_to_puma to {}\n",
            out.display()
        ),
        "stdout must carry exactly the contracted success line"
    );
    assert!(out.exists());
}

#[test]
fn test_empty_table_warns_and_exits_one() {
    let dir = TempDir::new().unwrap();
    let db = fixture_db(&dir);
    let out = dir.path().join("empty.feather");

    let output = run_exporter(&[
        "--table",
        "empty_crosswalk",
        "--output",
        out.to_str().unwrap(),
        "--db",
        db.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.is_empty(), "No success line for an empty table");
    assert!(stderr.contains("WARNING: Table empty_crosswalk is empty"));
    assert!(
        !stderr.contains("ERROR:"),
        "Empty table is a warning, not an error"
    );
    assert!(!out.exists());
}

#[test]
fn test_missing_table_errors_once_and_exits_one() {
    let dir = TempDir::new().unwrap();
    let db = fixture_db(&dir);
    let out = dir.path().join("missing.feather");

    let output = run_exporter(&[
        "--table",
        "no_such_table",
        "--output",
        out.to_str().unwrap(),
        "--db",
        db.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR:"));
    assert!(stderr.contains("no_such_table"));
    assert!(!stderr.contains("WARNING:"));
    assert_eq!(
        stderr.matches("ERROR:").count(),
        1,
        "The contracted error line must appear exactly once on stderr"
    );
}

#[test]
fn test_missing_database_errors_and_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.feather");

    let output = run_exporter(&[
        "--table",
        "geo_zip_to_puma",
        "--output",
        out.to_str().unwrap(),
        "--db",
        dir.path().join("does_not_exist.duckdb").to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR: Database connection failed"));
}

#[test]
fn test_missing_required_flags_exit_one() {
    let output = run_exporter(&[]);

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR: --table and --output are required"));
}

#[test]
fn test_list_tables_prints_names() {
    let dir = TempDir::new().unwrap();
    let db = fixture_db(&dir);

    let output = run_exporter(&["--db", db.to_str().unwrap(), "list-tables"]);

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, ["empty_crosswalk", "geo_zip_to_puma"]);
}
