use predicates::str::contains;
use std::fs;

mod common;
use common::{add_cycling, add_running, rtl, setup_test_db, temp_out};

const KYIV: &str = "50.45,30.52";

#[test]
fn export_json_writes_one_object_per_workout() {
    let db_path = setup_test_db("export_json");
    add_running(&db_path, KYIV, "5", "25", "170");
    add_cycling(&db_path, KYIV, "20", "60", "120");

    let out = temp_out("export_json", "json");
    rtl()
        .args(["--db", &db_path, "export", "json", "--out", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("parse export");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["kind"], "running");
    assert_eq!(rows[0]["pace_min_per_km"], 5.0);
    assert_eq!(rows[1]["kind"], "cycling");
    assert_eq!(rows[1]["speed_km_h"], 20.0);
}

#[test]
fn export_csv_includes_header_and_both_rows() {
    let db_path = setup_test_db("export_csv");
    add_running(&db_path, KYIV, "5", "25", "170");
    add_cycling(&db_path, KYIV, "20", "60", "120");

    let out = temp_out("export_csv", "csv");
    rtl()
        .args(["--db", &db_path, "export", "csv", "--out", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let mut lines = content.lines();
    let header = lines.next().expect("header line");
    assert!(header.starts_with("id,kind,label,created_at,lat,lng,distance_km,duration_min"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn export_with_no_workouts_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");

    let out = temp_out("export_empty", "json");
    rtl()
        .args(["--db", &db_path, "export", "json", "--out", &out])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}
