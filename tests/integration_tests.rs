use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_cycling, add_running, rtl, setup_test_db};

const KYIV: &str = "50.45,30.52";

#[test]
fn add_running_prints_pace_and_survives_to_the_next_process() {
    let db_path = setup_test_db("add_running_roundtrip");

    rtl()
        .args(["--db", &db_path, "add", "running", "--at", KYIV])
        .args(["--distance", "5", "--duration", "25", "--steps", "170"])
        .assert()
        .success()
        .stdout(contains("Recorded Jog"))
        .stdout(contains("5.00 min/km"));

    // a separate invocation hydrates the same store
    rtl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Jog"))
        .stdout(contains("5 km"))
        .stdout(contains("25 min"))
        .stdout(contains("170 steps/min"));
}

#[test]
fn add_cycling_prints_speed() {
    let db_path = setup_test_db("add_cycling");

    rtl()
        .args(["--db", &db_path, "add", "cycling", "--at", KYIV])
        .args(["--distance", "20", "--duration", "60", "--climb", "120"])
        .assert()
        .success()
        .stdout(contains("Recorded Cycling"))
        .stdout(contains("20.00 km/h"));

    rtl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Cycling"))
        .stdout(contains("120 m climb"));
}

#[test]
fn rejected_submit_leaves_the_store_empty() {
    let db_path = setup_test_db("rejected_submit");

    rtl()
        .args(["--db", &db_path, "add", "running", "--at", KYIV])
        .args(["--distance", "0", "--duration", "25", "--steps", "170"])
        .assert()
        .failure()
        .stderr(contains("must be a positive number"));

    rtl()
        .args(["--db", &db_path, "add", "running", "--at", KYIV])
        .args(["--distance", "5", "--duration", "-1", "--steps", "170"])
        .assert()
        .failure()
        .stderr(contains("must be a positive number"));

    rtl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts recorded yet."));
}

#[test]
fn running_without_step_rate_is_rejected() {
    let db_path = setup_test_db("missing_steps");

    rtl()
        .args(["--db", &db_path, "add", "running", "--at", KYIV])
        .args(["--distance", "5", "--duration", "25"])
        .assert()
        .failure()
        .stderr(contains("step rate is required"));
}

#[test]
fn malformed_coordinates_are_rejected() {
    let db_path = setup_test_db("bad_coords");

    rtl()
        .args(["--db", &db_path, "add", "running", "--at", "somewhere"])
        .args(["--distance", "5", "--duration", "25", "--steps", "170"])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinates"));
}

#[test]
fn list_by_distance_sorts_without_touching_insertion_order() {
    let db_path = setup_test_db("sorted_list");
    add_running(&db_path, KYIV, "8", "40", "165");
    add_running(&db_path, KYIV, "3", "18", "172");

    let sorted = rtl()
        .args(["--db", &db_path, "list", "--by-distance"])
        .output()
        .expect("run list");
    assert!(sorted.status.success());
    let sorted_out = String::from_utf8_lossy(&sorted.stdout).to_string();
    assert!(
        sorted_out.find("3 km").unwrap() < sorted_out.find("8 km").unwrap(),
        "expected 3 km before 8 km in: {sorted_out}"
    );

    // plain list keeps insertion order
    let unsorted = rtl()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("run list");
    assert!(unsorted.status.success());
    let unsorted_out = String::from_utf8_lossy(&unsorted.stdout).to_string();
    assert!(
        unsorted_out.find("8 km").unwrap() < unsorted_out.find("3 km").unwrap(),
        "expected 8 km before 3 km in: {unsorted_out}"
    );
}

#[test]
fn list_markers_replays_one_marker_per_workout() {
    let db_path = setup_test_db("marker_replay");
    add_running(&db_path, KYIV, "5", "25", "170");
    add_cycling(&db_path, "48.85,2.35", "20", "60", "120");

    let output = rtl()
        .args(["--db", &db_path, "list", "--markers"])
        .output()
        .expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert_eq!(stdout.matches("📍").count(), 2);
    assert!(stdout.contains("50.45000, 30.52000"));
    assert!(stdout.contains("48.85000, 2.35000"));
}

#[test]
fn show_recenters_on_the_selected_workout() {
    let db_path = setup_test_db("show_workout");
    let id = add_running(&db_path, KYIV, "5", "25", "170");

    rtl()
        .args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains("map centered on 50.45000, 30.52000"))
        .stdout(contains("selected"));
}

#[test]
fn show_unknown_id_fails_with_a_lookup_error() {
    let db_path = setup_test_db("show_unknown");
    add_running(&db_path, KYIV, "5", "25", "170");

    rtl()
        .args(["--db", &db_path, "show", "stale-id"])
        .assert()
        .failure()
        .stderr(contains("No workout with id stale-id"));
}

#[test]
fn reset_deletes_everything() {
    let db_path = setup_test_db("reset_all");
    add_running(&db_path, KYIV, "5", "25", "170");
    add_cycling(&db_path, KYIV, "20", "60", "120");

    rtl()
        .args(["--db", &db_path, "reset"])
        .assert()
        .success()
        .stdout(contains("Removed 2 workout(s)"));

    rtl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts recorded yet."))
        .stdout(contains("Jog").not());
}

#[test]
fn init_in_test_mode_creates_the_storage_file() {
    let db_path = setup_test_db("init_test_mode");

    rtl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}
