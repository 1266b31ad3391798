//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Most use
//! `info --json` to assert actual config values; the rest check that
//! configured word lists and score limits reach the `score` command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
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
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert!(json["config"]["max_score"].is_null());
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".dale-chall.toml"), "max_score = 8.0\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["max_score"], 8.0);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".dale-chall.toml"), "{reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("book").join("chapters");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(
        tmp.path().join("dale-chall.yaml"),
        "corpus_path: /srv/dale/corpus.json\n",
    )
    .unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["corpus_path"], "/srv/dale/corpus.json");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".dale-chall.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("dale-chall.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".dale-chall.json"),
        r#"{"log_level": "warn", "max_input_bytes": 4096}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
    assert_eq!(json["config"]["max_input_bytes"], 4096);
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".dale-chall.toml"), "max_score = 6.0\n").unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "max_score = 9.5\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_score"], 9.5);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"), "{reported}");
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(parent.join(".dale-chall.toml"), r#"log_level = "error""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".dale-chall.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

// =============================================================================
// Config reaching the score command
// =============================================================================

#[test]
fn configured_word_lists_are_used() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("familiar.txt"), "the\ncat\nsat\n").unwrap();
    fs::write(tmp.path().join("words.txt"), "cat\n").unwrap();
    fs::write(
        tmp.path().join(".dale-chall.toml"),
        "corpus_path = \"familiar.txt\"\ndictionary_path = \"words.txt\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("input.txt"), "The cat sat.").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "input.txt", "--json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stats"]["difficult_words"], 0);
}

#[test]
fn configured_max_score_gates() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("familiar.txt"), "the\n").unwrap();
    fs::write(tmp.path().join("words.txt"), "the\n").unwrap();
    fs::write(
        tmp.path().join(".dale-chall.toml"),
        "corpus_path = \"familiar.txt\"\ndictionary_path = \"words.txt\"\nmax_score = 1.0\n",
    )
    .unwrap();
    fs::write(tmp.path().join("input.txt"), "Quaggas gallop wildly.").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 1.00"));
}

#[test]
fn configured_input_limit_rejects_large_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("familiar.txt"), "the\n").unwrap();
    fs::write(tmp.path().join("words.txt"), "the\n").unwrap();
    fs::write(
        tmp.path().join(".dale-chall.toml"),
        "corpus_path = \"familiar.txt\"\ndictionary_path = \"words.txt\"\nmax_input_bytes = 8\n",
    )
    .unwrap();
    fs::write(tmp.path().join("input.txt"), "The text is longer than eight bytes.").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}
