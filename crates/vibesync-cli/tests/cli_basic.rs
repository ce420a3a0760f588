//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! points `VIBESYNC_HOME` at its own temporary directory so the user's real
//! config is never touched. The directory is removed when the test ends.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn scratch_home() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "vibesync-cli", "--"])
        .args(args)
        .env("VIBESYNC_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(home: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "command {args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_analyze_stressed_json() {
    let home = scratch_home();
    let json = run_json(
        home.path(),
        &[
            "analyze", "--stress", "9", "--energy", "high", "--activity", "working", "--json",
            "--instant",
        ],
    );

    assert_eq!(json["mood"]["category"], "stressed");
    assert!(json["mood"]["confidence"].as_u64().unwrap() >= 70);
    assert_eq!(json["recommendations"]["playlists"].as_array().unwrap().len(), 3);
    assert_eq!(json["profile"]["vibe_points"], 175);
    assert_eq!(json["notification"]["kind"], "success");
}

#[test]
fn test_analyze_text_output() {
    let home = scratch_home();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["analyze", "--stress", "3", "--energy", "medium", "--activity", "creative", "--instant"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("You're feeling creative"));
    assert!(stdout.contains("Music Playlists"));
    assert!(stdout.contains("+25 Vibe Points"));
}

#[test]
fn test_analyze_clamps_and_falls_back() {
    let home = scratch_home();
    let json = run_json(
        home.path(),
        &[
            "analyze", "--stress", "-5", "--energy", "sleepy", "--activity", "relaxing", "--json",
            "--instant",
        ],
    );
    // stress 0, medium energy, relaxing
    assert_eq!(json["mood"]["category"], "calm");
}

#[test]
fn test_recommend_json() {
    let home = scratch_home();
    let json = run_json(home.path(), &["recommend", "focused", "--json"]);
    assert_eq!(json["playlists"][0]["id"], "focused-deep-focus");
    assert_eq!(json["movements"].as_array().unwrap().len(), 3);
}

#[test]
fn test_moods_lists_all_categories() {
    let home = scratch_home();
    let (stdout, _, code) = run_cli(home.path(), &["moods"]);
    assert_eq!(code, 0);
    for mood in ["stressed", "calm", "energetic", "focused", "creative"] {
        assert!(stdout.contains(mood), "missing {mood}");
    }
}

#[test]
fn test_play_known_and_unknown_playlist() {
    let home = scratch_home();
    let (stdout, _, code) = run_cli(home.path(), &["play", "calm-tea-jazz"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Now playing: Slow Sunday Jazz"));

    let (_, stderr, code) = run_cli(home.path(), &["play", "no-such-playlist"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: unknown playlist: 'no-such-playlist'"));
}

#[test]
fn test_kit_order() {
    let home = scratch_home();
    let (stdout, _, code) = run_cli(home.path(), &["kit", "order"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("wellness kit has been ordered"));
    assert!(stdout.contains("Vibe Points: 200"));
}

#[test]
fn test_config_set_get_reset() {
    let home = scratch_home();

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "classifier.high_stress_threshold"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "7");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "classifier.high_stress_threshold", "9"]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "classifier.high_stress_threshold"]);
    assert_eq!(stdout.trim(), "9");

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "classifier.calm_max_stress", "9"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (_, _, code) = run_cli(home.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "classifier.high_stress_threshold"]);
    assert_eq!(stdout.trim(), "7");
}

#[test]
fn test_config_unknown_key_fails() {
    let home = scratch_home();
    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "ui.nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_completions_bash() {
    let home = scratch_home();
    let (stdout, _, code) = run_cli(home.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("vibesync"));
}

#[test]
fn test_temp_home_is_removed_after_use() {
    let home = scratch_home();
    let path = home.path().to_path_buf();
    let (stdout, _, code) = run_cli(&path, &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("classifier"));
    assert!(path.join("config.toml").exists());

    drop(home);
    assert!(!path.exists());
}

#[test]
fn test_config_list_uses_snake_case_sections() {
    let home = scratch_home();
    let json = run_json(home.path(), &["config", "list"]);
    assert_eq!(json["profile"]["vibe_points"], 150);
    assert_eq!(json["rewards"]["submission_points"], 25);
    assert!(json["profile"].get("vibePoints").is_none());
}
