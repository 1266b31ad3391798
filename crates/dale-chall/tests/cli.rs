//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A working directory with word lists in `data/` and an input file.
fn workspace(text: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(
        data.join("corpus.json"),
        r#"["the", "cat", "sat", "on", "mat", "he", "went", "home", "left", "walk"]"#,
    )
    .unwrap();
    fs::write(
        data.join("dictionary.json"),
        r#"["cat", "smith", "consequently", "zebra"]"#,
    )
    .unwrap();
    fs::write(tmp.path().join("input.txt"), text).unwrap();
    tmp
}

fn score_json(dir: &std::path::Path) -> serde_json::Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "score", "input.txt", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("score"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn global_flags_accepted() {
    for flags in [
        &["--quiet"][..],
        &["-v"],
        &["-vv"],
        &["--color", "never"],
        &["--color", "always"],
    ] {
        cmd().args(flags).arg("info").assert().success();
    }
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_prints_summary() {
    let tmp = workspace("The cat sat on the mat. He went home.");
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentences"))
        .stdout(predicate::str::contains("Difficult words"))
        .stdout(predicate::str::contains("Raw score"))
        .stdout(predicate::str::contains("grade 4 and below"));
}

#[test]
fn score_json_has_stats_and_data() {
    let tmp = workspace("Dr. Smith went home. He left.");
    let json = score_json(tmp.path());

    assert_eq!(json["stats"]["sentence_count"], 2);
    assert_eq!(json["stats"]["word_count"], 6);
    assert_eq!(json["data"]["sentences"][0], "Dr. Smith went home.");
    assert_eq!(json["data"]["sentences"][1], "He left.");
}

#[test]
fn score_partition_covers_all_words() {
    let tmp = workspace("Consequently the zebra walked. The quagga sat. Quaggas graze!");
    let json = score_json(tmp.path());

    let easy = json["stats"]["easy_words"].as_u64().unwrap();
    let difficult = json["stats"]["difficult_words"].as_u64().unwrap();
    assert_eq!(easy + difficult, json["stats"]["word_count"].as_u64().unwrap());
    assert_eq!(
        json["data"]["easy_words"].as_array().unwrap().len() as u64,
        easy
    );
}

#[test]
fn repeated_difficult_word_counted_once() {
    let tmp = workspace("The quagga sat. The quagga left.");
    let json = score_json(tmp.path());

    assert_eq!(json["data"]["difficult_words"], serde_json::json!(["quagga"]));
}

#[test]
fn export_writes_result_file() {
    let tmp = workspace("The cat sat on the mat.");
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "score",
            "input.txt",
            "--export",
            "result.json",
        ])
        .assert()
        .success();

    let written = fs::read_to_string(tmp.path().join("result.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["stats"]["word_count"], 6);
    assert!(json["stats"]["raw_score"].is_f64());
}

#[test]
fn explicit_word_list_flags() {
    let tmp = workspace("The cat sat.");
    let lists = tmp.path().join("lists");
    fs::create_dir(&lists).unwrap();
    fs::write(lists.join("familiar.txt"), "cat\n").unwrap();
    fs::write(lists.join("words.txt"), "cat\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "score",
            "input.txt",
            "--corpus",
            "lists/familiar.txt",
            "--dictionary",
            "lists/words.txt",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // "sat" is only on the default list.
    assert_eq!(json["data"]["difficult_words"], serde_json::json!(["sat"]));
}

#[test]
fn max_score_gate_fails() {
    let tmp = workspace("Quaggas galloped magnificently.");
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "score",
            "input.txt",
            "--max-score",
            "2.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 2.00"));
}

#[test]
fn max_score_gate_fails_with_json_output() {
    let tmp = workspace("Quaggas galloped magnificently.");
    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "score",
            "input.txt",
            "--json",
            "--max-score",
            "1.0",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["over_max"], true);
    assert_eq!(json["max_score"], 1.0);
    assert!(json["stats"]["raw_score"].as_f64().unwrap() > 1.0);
    assert!(String::from_utf8_lossy(&output.stderr).contains("max: 1.00"));
}

#[test]
fn json_output_omits_gate_without_limit() {
    let tmp = workspace("The cat sat on the mat.");
    let json = score_json(tmp.path());
    assert!(json.get("over_max").is_none());
    assert!(json.get("max_score").is_none());
}

#[test]
fn max_score_gate_passes() {
    let tmp = workspace("The cat sat on the mat.");
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "score",
            "input.txt",
            "--max-score",
            "9.0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn empty_input_fails_cleanly() {
    let tmp = workspace("");
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "input.txt", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no scorable text"));
}

#[test]
fn missing_word_lists_fail() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), "The cat sat.").unwrap();
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "score",
            "input.txt",
            "--corpus",
            "nowhere.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("word list"));
}

#[test]
fn missing_input_file_fails() {
    let tmp = workspace("unused");
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}
