use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, log_on, setup_test_db, spl, temp_out};

#[test]
fn test_export_csv_writes_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db(&db_path);

    log_on(&db_path, "5", "2026-07-20", "08:30");
    log_on(&db_path, "10", "2026-07-21", "21:00");

    spl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("timestamp,activity_id,name,gallons,source"));
    assert!(content.contains("Laundry Load"));
    assert!(content.contains("Take a Bath"));
    assert!(content.contains(",23,"));
}

#[test]
fn test_export_json_contains_entries() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db(&db_path);

    log_on(&db_path, "10", "2026-07-21", "21:00");

    spl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"name\": \"Take a Bath\""));
    assert!(content.contains("\"gallons\": 45"));
}

#[test]
fn test_export_range_filters_by_month() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "csv");
    init_db(&db_path);

    log_on(&db_path, "5", "2026-07-20", "08:30");
    log_on(&db_path, "10", "2026-08-02", "21:00");

    spl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
            "--range", "2026-07",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Laundry Load"));
    assert!(!content.contains("Take a Bath"));
}

#[test]
fn test_export_empty_range_warns_without_file() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db(&db_path);

    log_on(&db_path, "5", "2026-07-20", "08:30");

    spl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
            "--range", "2020",
        ])
        .assert()
        .success()
        .stdout(contains("No logged activities found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_rel");
    init_db(&db_path);

    spl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db(&db_path);

    log_on(&db_path, "5", "2026-07-20", "08:30");

    fs::write(&out, "old content").expect("seed existing file");

    spl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Laundry Load"));
    assert!(!content.contains("old content"));
}

#[test]
fn test_export_declines_overwrite_without_force() {
    let db_path = setup_test_db("export_no_force");
    let out = temp_out("export_no_force", "csv");
    init_db(&db_path);

    log_on(&db_path, "5", "2026-07-20", "08:30");

    fs::write(&out, "old content").expect("seed existing file");

    spl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    let content = fs::read_to_string(&out).expect("file untouched");
    assert_eq!(content, "old content");
}
