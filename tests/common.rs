#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn spl() -> Command {
    cargo_bin_cmd!("rtimelogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_splish.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the database schema for a test
pub fn init_db(db_path: &str) {
    spl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Backdate one activity log entry, e.g. `log_on(&db, "5", "2026-07-20", "08:30")`
pub fn log_on(db_path: &str, activity: &str, date: &str, at: &str) {
    spl()
        .args([
            "--db", db_path, "--test", "log", activity, "--date", date, "--at", at,
        ])
        .assert()
        .success();
}
