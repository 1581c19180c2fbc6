//! Read-side commands over the profile store: show, list, reset.

#![cfg(unix)]

use super::test_utils::TestEnv;

#[test]
fn test_show_before_any_start() {
    let env = TestEnv::new();
    let output = env.skiff().arg("show").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no saved configuration"), "{}", stdout);
}

#[test]
fn test_show_renders_saved_settings() {
    let env = TestEnv::new();
    assert!(env
        .skiff()
        .args(["start", "--runtime", "containerd", "--cpu", "4"])
        .output()
        .unwrap()
        .status
        .success());

    let output = env.skiff().arg("show").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("containerd"));
    assert!(stdout.contains("Last saved"));
}

#[test]
fn test_show_json_is_machine_readable() {
    let env = TestEnv::new();
    assert!(env
        .skiff()
        .args(["start", "--memory", "8"])
        .output()
        .unwrap()
        .status
        .success());

    let output = env
        .skiff()
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be pure JSON");
    assert_eq!(value["profile"], "default");
    assert_eq!(value["settings"]["memory"], 8);
}

#[test]
fn test_list_shows_profiles_and_skips_corrupt_records() {
    let env = TestEnv::new();
    assert!(env
        .skiff()
        .args(["start", "dev", "--runtime", "containerd"])
        .output()
        .unwrap()
        .status
        .success());
    env.write_record("broken", "not toml at all [");

    let output = env.skiff().arg("list").output().unwrap();
    assert!(output.status.success(), "corrupt record must not be fatal");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dev"));
    assert!(stdout.contains("containerd"));
    assert!(!stdout.contains("broken"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken"), "should warn about the skip");
}

#[test]
fn test_list_json_counts_profiles() {
    let env = TestEnv::new();
    assert!(env.skiff().arg("start").output().unwrap().status.success());

    let output = env
        .skiff()
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 1);
    assert_eq!(value["profiles"][0]["profile"], "default");
}

#[test]
fn test_reset_discards_record_and_is_idempotent() {
    let env = TestEnv::new();
    assert!(env.skiff().arg("start").output().unwrap().status.success());
    assert!(env.record_path("default").exists());

    let output = env.skiff().args(["reset", "--force"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Discarded"));
    assert!(!env.record_path("default").exists());

    let output = env.skiff().args(["reset", "--force"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("nothing saved"));
}

#[test]
fn test_reset_then_start_is_a_fresh_bootstrap() {
    let env = TestEnv::new();
    assert!(env
        .skiff()
        .args(["start", "--cpu", "8"])
        .output()
        .unwrap()
        .status
        .success());
    assert!(env
        .skiff()
        .args(["reset", "--force"])
        .output()
        .unwrap()
        .status
        .success());
    assert!(env.skiff().arg("start").output().unwrap().status.success());

    assert_eq!(env.payload()["settings"]["cpu"], 2);
}
