use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_info_reports_the_host_platform() {
    Command::cargo_bin("softgl")
        .unwrap()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("os "))
        .stdout(predicate::str::contains("supported"));
}

#[test]
fn test_load_never_fails_the_caller() {
    // On a non-Windows host this takes the unsupported-OS path; on a Windows
    // x86-64 checkout without a provisioned artifact it takes the
    // missing-artifact path. Either way the process exits 0.
    Command::cargo_bin("softgl")
        .unwrap()
        .arg("load")
        .assert()
        .success();
}

#[test]
fn test_gate_rejection_touches_no_cache() {
    let tmp = tempdir().unwrap();

    Command::cargo_bin("softgl")
        .unwrap()
        .arg("load")
        .env("SOFTGL_OS", "plan9")
        .env("TMPDIR", tmp.path())
        .env("TMP", tmp.path())
        .env("TEMP", tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unsupported operating system"));

    // The rejection happened before any filesystem work
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_unsupported_architecture_names_what_it_saw() {
    Command::cargo_bin("softgl")
        .unwrap()
        .args(["load", "--os", "Windows 11", "--arch", "armv8-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unsupported architecture: ARM64"));
}

#[test]
fn test_forced_windows_host_reaches_the_artifact_stage() {
    // Past the gate the outcome depends on whether this checkout bundles an
    // artifact: none provisioned reports the gap, a provisioned one is
    // extracted and load is attempted.
    Command::cargo_bin("softgl")
        .unwrap()
        .args(["load", "--os", "Windows 11", "--arch", "amd64"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match("no bundled library|loaded|failed loading").unwrap(),
        );
}

#[test]
fn test_info_with_overrides_prints_the_cache_path_shape() {
    let assert = Command::cargo_bin("softgl")
        .unwrap()
        .args(["info", "--os", "Windows 11", "--arch", "amd64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x86-64"));

    // Supported either way; the cache line appears only when an artifact is
    // bundled, and then it must carry the platform segment
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    if stdout.contains("cache") {
        assert!(stdout.contains("windows-x86-64"));
    }
}
