//! End-to-end CLI integration tests for the `relmo` binary.
//!
//! Each test runs the binary as a subprocess via `assert_cmd`, inside its own
//! temporary directory with colour disabled.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` targeting the cargo-built `relmo` binary, isolated from
/// any user configuration.
fn relmo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("relmo").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("RELMO_NO_PAGER", "1")
        .env_remove("RELMO_DIR")
        .env_remove("RELMO_RESULT_PRECISION")
        .env_remove("RELMO_INPUT_PRECISION")
        .env_remove("RELMO_HOURS_PRECISION")
        .env_remove("RELMO_NON_FINITE")
        .env_remove("RELMO_COLOR");
    cmd
}

fn calc_json(dir: &TempDir, args: &[&str]) -> (bool, serde_json::Value) {
    let mut full = vec!["calc", "--json"];
    full.extend_from_slice(args);
    let output = relmo(dir).args(&full).output().unwrap();
    let json = serde_json::from_slice(&output.stdout).unwrap();
    (output.status.success(), json)
}

// ---------------------------------------------------------------------------
// calc
// ---------------------------------------------------------------------------

#[test]
fn calc_prints_transcript() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["calc", "100", "30", "80", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Input Data ---"))
        .stdout(predicate::str::contains("Distance (s): 100.00 Km"))
        .stdout(predicate::str::contains("Time (t): 30.00 min (0.500 hours)"))
        .stdout(predicate::str::contains("Velocity 1 (v1): 80.00 Km/h"))
        .stdout(predicate::str::contains("Velocity 2 (v2): 20.00 Km/h"))
        .stdout(predicate::str::contains("Meeting Time (r): 1.500 hours"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn calc_negative_velocity() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["calc", "0", "60", "0", "-50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meeting Time (r): 1.000 hours"));
}

#[test]
fn calc_accepts_hyphenated_literals() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["calc", "1", "1", "-.5", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Velocity 1 (v1): -0.50 Km/h"))
        .stdout(predicate::str::contains("Meeting Time (r): -0.387 hours"));

    let (ok, json) = calc_json(&tmp, &["-inf", "0", "2", "1"]);
    assert!(ok);
    assert!(json["distance_km"].is_null());
    assert!(json["meeting_time_hours"].is_null());

    relmo(&tmp)
        .args(["calc", "--strict", "-inf", "0", "2", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Please enter only numbers"));
}

#[test]
fn calc_json_flag_after_values() {
    let tmp = TempDir::new().unwrap();
    let output = relmo(&tmp)
        .args(["calc", "1", "1", "-.5", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["velocity1_kmh"], -0.5);
}

#[test]
fn calc_equal_velocities_fails_once() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["calc", "50", "0", "10", "10"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: The velocities cannot be equal (division by zero).",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn calc_invalid_number() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["calc", "abc", "10", "5", "3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Please enter only numbers in every field.",
        ))
        .stdout(predicate::str::contains("Meeting Time").not());
}

#[test]
fn calc_json_success_and_failure() {
    let tmp = TempDir::new().unwrap();

    let (ok, json) = calc_json(&tmp, &["100", "30", "80", "20"]);
    assert!(ok);
    assert_eq!(json["time_hours"], 0.5);
    assert_eq!(json["displacement_term"], -10.0);
    assert_eq!(json["relative_velocity"], 60.0);
    assert_eq!(json["meeting_time_hours"], 1.5);

    let (ok, json) = calc_json(&tmp, &["50", "0", "10", "10"]);
    assert!(!ok);
    assert_eq!(json["error"]["kind"], "division_by_zero");

    let (ok, json) = calc_json(&tmp, &["1", "12x", "2", "3"]);
    assert!(!ok);
    assert_eq!(json["error"]["kind"], "invalid_number");
    assert_eq!(json["error"]["field"], "time");
}

#[test]
fn calc_strict_rejects_infinity() {
    let tmp = TempDir::new().unwrap();
    let (ok, json) = calc_json(&tmp, &["inf", "0", "2", "1"]);
    assert!(ok);
    assert!(json["meeting_time_hours"].is_null());

    relmo(&tmp)
        .args(["calc", "--strict", "inf", "0", "2", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Please enter only numbers"));
}

#[test]
fn calc_color_always_emits_escapes() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["calc", "--color", "always", "100", "30", "80", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_file_and_env_change_precision() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));

    relmo(&tmp)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    std::fs::write(
        tmp.path().join(".relmo/config.yaml"),
        "result-precision: 1\ninput-precision: 0\n",
    )
    .unwrap();

    relmo(&tmp)
        .args(["calc", "100", "30", "80", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance (s): 100 Km"))
        .stdout(predicate::str::contains("Meeting Time (r): 1.5 hours"));

    relmo(&tmp)
        .env("RELMO_RESULT_PRECISION", "4")
        .args(["calc", "100", "30", "80", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meeting Time (r): 1.5000 hours"));
}

#[test]
fn config_show_reports_effective_values() {
    let tmp = TempDir::new().unwrap();
    let output = relmo(&tmp)
        .args(["config", "show", "--json", "--strict"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result-precision"], 3);
    assert_eq!(json["non-finite"], "reject");

    relmo(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# source: defaults"))
        .stdout(predicate::str::contains("input-precision: 2"));
}

#[test]
fn invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join(".relmo")).unwrap();
    std::fs::write(tmp.path().join(".relmo/config.yaml"), "result-precision: 99\n").unwrap();

    relmo(&tmp)
        .args(["calc", "1", "1", "2", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("result-precision"));
}

// ---------------------------------------------------------------------------
// form
// ---------------------------------------------------------------------------

#[test]
fn form_session_over_stdin() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .arg("form")
        .write_stdin("100\n30\n80\n20\n50\n0\n10\n10\n:clear\n:show\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance (Km): "))
        .stdout(predicate::str::contains("Meeting Time (r): 1.500 hours"))
        .stdout(predicate::str::contains("The velocities cannot be equal"))
        .stdout(predicate::str::contains("Transcript cleared."))
        .stdout(predicate::str::contains("Transcript is empty."));
}

#[test]
fn form_rejects_json() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["form", "--json"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not supported"));
}

// ---------------------------------------------------------------------------
// misc
// ---------------------------------------------------------------------------

#[test]
fn version_and_help() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("relmo version "));

    relmo(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("relmo 0.1.0 ("))
        .stdout(predicate::str::contains(std::env::consts::OS));

    relmo(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn completion_generates_script() {
    let tmp = TempDir::new().unwrap();
    relmo(&tmp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("relmo"));
}
