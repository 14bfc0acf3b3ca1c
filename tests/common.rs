#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtl() -> Command {
    cargo_bin_cmd!("rtracklogger")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtracklogger.sqlite", name));
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

/// Record a running workout via the CLI and return the printed id.
pub fn add_running(db_path: &str, at: &str, distance: &str, duration: &str, steps: &str) -> String {
    let output = rtl()
        .args([
            "--db", db_path, "add", "running", "--at", at, "--distance", distance, "--duration",
            duration, "--steps", steps,
        ])
        .output()
        .expect("run add");
    assert!(output.status.success(), "add running failed: {output:?}");
    extract_id(&String::from_utf8_lossy(&output.stdout))
}

/// Record a cycling workout via the CLI and return the printed id.
pub fn add_cycling(db_path: &str, at: &str, distance: &str, duration: &str, climb: &str) -> String {
    let output = rtl()
        .args([
            "--db", db_path, "add", "cycling", "--at", at, "--distance", distance, "--duration",
            duration, "--climb", climb,
        ])
        .output()
        .expect("run add");
    assert!(output.status.success(), "add cycling failed: {output:?}");
    extract_id(&String::from_utf8_lossy(&output.stdout))
}

/// Pull the workout id out of the `add` confirmation line (`[id <...>]`).
pub fn extract_id(stdout: &str) -> String {
    stdout
        .split("[id ")
        .nth(1)
        .and_then(|rest| rest.split(']').next())
        .expect("id in add output")
        .to_string()
}
