//! End-to-end start flow: load, resolve, drive, save.

#![cfg(unix)]

use super::test_utils::TestEnv;
use std::fs;

#[test]
fn test_first_start_uses_defaults_and_saves_record() {
    let env = TestEnv::new();

    let output = env.skiff().arg("start").output().unwrap();
    assert!(
        output.status.success(),
        "start should succeed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payload = env.payload();
    assert_eq!(payload["profile"], "default");
    assert_eq!(payload["settings"]["runtime"], "docker");
    assert_eq!(payload["settings"]["cpu"], 2);

    let record = fs::read_to_string(env.record_path("default")).unwrap();
    assert!(record.contains("runtime = \"docker\""));
    assert!(record.contains("disk = 60"));
}

#[test]
fn test_saved_values_carry_forward_when_flags_omitted() {
    let env = TestEnv::new();

    let output = env
        .skiff()
        .args(["start", "--runtime", "containerd", "--cpu", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = env.skiff().arg("start").output().unwrap();
    assert!(output.status.success());

    let payload = env.payload();
    assert_eq!(payload["settings"]["runtime"], "containerd");
    assert_eq!(payload["settings"]["cpu"], 4);
}

#[test]
fn test_explicit_flag_wins_on_later_start() {
    let env = TestEnv::new();

    assert!(env.skiff().arg("start").output().unwrap().status.success());
    let output = env
        .skiff()
        .args(["start", "--memory", "8"])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(env.payload()["settings"]["memory"], 8);
    let record = fs::read_to_string(env.record_path("default")).unwrap();
    assert!(record.contains("memory = 8"));
}

#[test]
fn test_creation_only_flag_warns_on_existing_environment() {
    let env = TestEnv::new();

    assert!(env.skiff().arg("start").output().unwrap().status.success());
    let output = env
        .skiff()
        .args(["start", "--disk", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("first created"),
        "expected creation-only warning, got: {}",
        stderr
    );
    // the explicit value still wins and is persisted
    assert_eq!(env.payload()["settings"]["disk"], 100);
}

#[test]
fn test_corrupt_record_warns_and_starts_with_defaults() {
    let env = TestEnv::new();
    env.write_record("default", "runtime = [this is not toml");

    let output = env.skiff().arg("start").output().unwrap();
    assert!(
        output.status.success(),
        "a corrupt record must not block the start"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config load failed"), "stderr: {}", stderr);
    assert!(stderr.contains("reverting to default settings"));
    assert_eq!(env.payload()["settings"]["runtime"], "docker");

    // the record was replaced by a clean save
    let record = fs::read_to_string(env.record_path("default")).unwrap();
    assert!(record.contains("runtime = \"docker\""));
}

#[test]
fn test_failed_driver_leaves_no_record() {
    let env = TestEnv::new();

    let output = env
        .skiff()
        .args(["start", "--cpu", "4"])
        .env("SKIFF_DRIVER_EXIT", "1")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(
        !env.record_path("default").exists(),
        "no save should happen when the start fails"
    );
}

#[test]
fn test_named_profiles_are_independent() {
    let env = TestEnv::new();

    assert!(env
        .skiff()
        .args(["start", "dev", "--cpu", "8"])
        .output()
        .unwrap()
        .status
        .success());
    assert!(env.skiff().arg("start").output().unwrap().status.success());

    assert!(env.record_path("dev").exists());
    assert_eq!(env.payload()["profile"], "default");
    assert_eq!(env.payload()["settings"]["cpu"], 2);
}

#[test]
fn test_invalid_mount_fails_before_the_driver_runs() {
    let env = TestEnv::new();

    let output = env
        .skiff()
        .args(["start", "--mount", "/src:rw"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid mount"), "stderr: {}", stderr);
    assert!(!env.record_path("default").exists());
}
