use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn profile_ir() -> Command {
    let mut cmd = Command::cargo_bin("profile-ir").unwrap();
    cmd.env_remove("PROFILE_IR_LOG")
        .env_remove("PROFILE_IR_CORPUS")
        .env_remove("PROFILE_IR_PROFILES")
        .env_remove("PROFILE_IR_DICTIONARY");
    cmd
}

#[test]
fn reference_run_prints_tables() {
    profile_ir()
        .arg("--corpus")
        .arg(data_dir().join("corpus"))
        .arg("--profiles")
        .arg(data_dir().join("profiles"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Interests: movies & politics"))
        .stdout(predicate::str::contains("0.831890330808"))
        .stdout(predicate::str::contains("0.625"))
        .stdout(predicate::str::contains("Documents with score less than 0.1 are hidden"));
}

#[test]
fn frequencies_table_is_optional() {
    profile_ir()
        .arg("--corpus")
        .arg(data_dir().join("corpus"))
        .arg("--profiles")
        .arg(data_dir().join("profiles"))
        .arg("--dictionary")
        .arg(data_dir().join("dictionary"))
        .arg("--show-frequencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terms frequencies (similar grouped)"));
}

#[test]
fn json_output_is_parseable() {
    let output = profile_ir()
        .arg("--corpus")
        .arg(data_dir().join("corpus"))
        .arg("--profiles")
        .arg(data_dir().join("profiles"))
        .args(["--format", "json", "--scoring", "cosine"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let user3 = &value["profiles"][2];
    assert_eq!(user3["id"], "User3");
    assert_eq!(user3["recommendations"][0]["key"], "labour-activist");
    assert_eq!(value["config"]["algorithm"]["kind"], "cosine_similarity");
}

#[test]
fn unknown_interest_fails_that_profile_only() {
    let tmp = TempDir::new().unwrap();
    let profiles = tmp.path().join("profiles");
    fs::write(&profiles, "User1#movies\nUser7#knitting\n").unwrap();

    profile_ir()
        .arg("--corpus")
        .arg(data_dir().join("corpus"))
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("blade-runner"))
        .stdout(predicate::str::contains("knitting"));
}

#[test]
fn missing_corpus_is_a_data_error() {
    let tmp = TempDir::new().unwrap();
    profile_ir()
        .arg("--corpus")
        .arg(tmp.path().join("missing"))
        .arg("--profiles")
        .arg(data_dir().join("profiles"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn negative_threshold_is_a_usage_error() {
    profile_ir()
        .arg("--corpus")
        .arg(data_dir().join("corpus"))
        .arg("--profiles")
        .arg(data_dir().join("profiles"))
        .args(["--threshold=-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid configuration"));
}
