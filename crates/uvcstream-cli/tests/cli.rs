// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the uvcstream CLI
//!
//! These tests verify CLI commands work correctly end-to-end using the
//! assert_cmd crate pattern. Tests touching real hardware are ignored by
//! default; run them with `--include-ignored` on a machine with libuvc and
//! a connected UVC camera.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;

/// Helper to create a Command for the uvcstream binary
fn uvcstream_cmd() -> Command {
    Command::cargo_bin("uvcstream").expect("uvcstream binary should be built")
}

// =============================================================================
// No hardware required
// =============================================================================

#[test]
fn help_lists_subcommands() {
    uvcstream_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("devices"))
        .stdout(predicate::str::contains("controls"))
        .stdout(predicate::str::contains("capture"));
}

#[test]
fn version_flag() {
    uvcstream_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("uvcstream"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    uvcstream_cmd()
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn controls_set_requires_value() {
    uvcstream_cmd()
        .args(["controls", "--set", "Brightness"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--value"));
}

#[test]
fn capture_rejects_unknown_format() {
    uvcstream_cmd()
        .args(["capture", "--format", "h264"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("h264"));
}

#[test]
fn capture_rejects_bad_usb_id() {
    uvcstream_cmd()
        .args(["capture", "--vendor-id", "notahexid"])
        .assert()
        .failure()
        .code(2);
}

// =============================================================================
// Hardware required (libuvc + connected UVC camera)
// =============================================================================

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn devices_lists_hardware() {
    uvcstream_cmd()
        .args(["devices", "--bus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("device(s) found"));
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn devices_json_output_parses() {
    let output = uvcstream_cmd()
        .args(["devices", "--json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON output");
    assert!(parsed.is_array());
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn controls_lists_hardware() {
    uvcstream_cmd()
        .arg("controls")
        .assert()
        .success()
        .stdout(predicate::str::contains("control(s) discovered"));
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn capture_smoke() {
    uvcstream_cmd()
        .args(["capture", "-n", "5", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"frames\": 5"));
}
