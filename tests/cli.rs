use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_LEDGER_DIR", base).env_remove("RUST_LOG");
    cmd
}

fn ledger_path(base: &Path) -> std::path::PathBuf {
    base.join("data").join("expenses.csv")
}

#[test]
fn test_add_records_valid_lines_and_reports_bad_ones() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["add", "15.50 coffee latte\nabc food lunch\n20 transport taxi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Recorded 2 expenses:"))
        .stdout(predicate::str::contains("Line 2: Invalid amount 'abc'"))
        .stdout(predicate::str::contains("Use: [DD/MM]"));

    let contents = fs::read_to_string(ledger_path(temp_dir.path())).unwrap();
    assert!(contents.starts_with("Timestamp,Amount,Category,Description"));
    assert!(contents.contains(",15.50,coffee,latte"));
    assert!(contents.contains(",20.00,transport,taxi"));
    assert!(!contents.contains("lunch"));
}

#[test]
fn test_add_date_prefixed_entry() {
    let temp_dir = TempDir::new().unwrap();
    let year = chrono::Local::now().format("%Y").to_string();

    expense(temp_dir.path())
        .args(["add", "12/2 10440 medicine vitamin D"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}-02-12", year)));

    let contents = fs::read_to_string(ledger_path(temp_dir.path())).unwrap();
    assert!(contents.contains(&format!("{}-02-12,10440.00,medicine,vitamin D", year)));
}

#[test]
fn test_add_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .arg("add")
        .write_stdin("7 food bread\n\n8 food milk\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 2 expenses"));
}

#[test]
fn test_add_with_only_bad_lines_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["add", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ 1 line could not be parsed:"))
        .stdout(predicate::str::contains("Expected at least 3 components"));

    assert!(!ledger_path(temp_dir.path()).exists());
}

#[test]
fn test_check_does_not_write() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["check", "15.50 coffee latte"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🔎 Parsed 1 expense:"));

    assert!(!ledger_path(temp_dir.path()).exists());
}

#[test]
fn test_list_after_add() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["add", "15.50 coffee latte\n20 transport taxi"])
        .assert()
        .success();

    expense(temp_dir.path())
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taxi"))
        .stdout(predicate::str::contains("latte").not())
        .stdout(predicate::str::contains("Showing 1 of 2 rows, total $20.00"));
}

#[test]
fn test_list_empty_ledger() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn test_strict_dates_setting_rejects_bad_dates() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"strict_dates": true}"#,
    )
    .unwrap();

    expense(temp_dir.path())
        .args(["check", "99/99 10 food lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1: Invalid date '99/99'"));
}

#[test]
fn test_ledger_failure_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the data directory should be
    fs::write(temp_dir.path().join("data"), "blocked").unwrap();

    expense(temp_dir.path())
        .args(["add", "15.50 coffee latte"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to save expenses"));
}

#[test]
fn test_init_then_config() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(temp_dir.path().join("config.json").exists());

    expense(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"))
        .stdout(predicate::str::contains("FallbackToToday"));
}
