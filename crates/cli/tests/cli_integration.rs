//! CLI integration tests for every subcommand.
//!
//! Uses `assert_cmd` to spawn the `tokenlist` binary and verify exit
//! codes, stdout content, and stderr content. Tests run from the
//! workspace root so the `fixtures/` paths resolve.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

/// Helper: create a Command for the `tokenlist` binary, rooted at workspace.
fn tokenlist() -> Command {
    let mut cmd = cargo_bin_cmd!("tokenlist");
    cmd.current_dir(workspace_root());
    cmd.env_remove("TOKENLIST_LOG");
    cmd
}

fn stdout_json(args: &[&str]) -> serde_json::Value {
    let out = tokenlist().args(args).output().expect("run tokenlist");
    serde_json::from_slice(&out.stdout).expect("stdout is JSON")
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    tokenlist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Token list diff and versioning toolkit",
        ));
}

#[test]
fn version_exits_0() {
    tokenlist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenlist"));
}

// ──────────────────────────────────────────────
// 2. Diff subcommand
// ──────────────────────────────────────────────

#[test]
fn diff_identical_lists_exits_0() {
    tokenlist()
        .args(["diff", "fixtures/base.json", "fixtures/base.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no differences"));
}

#[test]
fn diff_added_token_exits_1() {
    tokenlist()
        .args(["diff", "fixtures/base.json", "fixtures/added.json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(format!("+ 1 {} USDT", USDT)));
}

#[test]
fn diff_reports_removed_token_against_bare_array() {
    tokenlist()
        .args(["diff", "fixtures/base.json", "fixtures/tokens.json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(format!("- 1 {} DAI", DAI)));
}

#[test]
fn diff_json_lists_changed_fields() {
    let value = stdout_json(&[
        "diff",
        "--output",
        "json",
        "fixtures/base.json",
        "fixtures/patched.json",
    ]);
    assert_eq!(value["added"], serde_json::json!([]));
    assert_eq!(value["removed"], serde_json::json!([]));
    assert_eq!(value["changed"]["1"][USDC], serde_json::json!(["logoURI"]));
}

#[test]
fn diff_quiet_prints_nothing() {
    tokenlist()
        .args(["--quiet", "diff", "fixtures/base.json", "fixtures/added.json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn diff_nonexistent_file_exits_1() {
    tokenlist()
        .args(["diff", "nonexistent_xyz.json", "fixtures/base.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error reading"));
}

#[test]
fn diff_malformed_json_exits_1() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    tokenlist()
        .args(["diff", path.to_str().unwrap(), "fixtures/base.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error parsing JSON"));
}

#[test]
fn diff_json_error_is_structured() {
    let out = tokenlist()
        .args(["--output", "json", "diff", "nonexistent_xyz.json", "fixtures/base.json"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let err: serde_json::Value = serde_json::from_slice(&out.stderr).expect("stderr is JSON");
    assert!(err["error"].as_str().unwrap().contains("nonexistent_xyz.json"));
}

#[test]
fn strict_rejects_duplicate_identity() {
    tokenlist()
        .args(["--strict", "diff", "fixtures/duplicate.json", "fixtures/tokens.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("duplicate token"));
}

#[test]
fn duplicates_allowed_without_strict() {
    tokenlist()
        .args(["diff", "fixtures/duplicate.json", "fixtures/tokens.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate token").not());
}

// ──────────────────────────────────────────────
// 3. Bump subcommand
// ──────────────────────────────────────────────

#[test]
fn bump_addition_is_minor() {
    tokenlist()
        .args(["bump", "fixtures/base.json", "fixtures/added.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minor (1.0.0 -> 1.1.0)"));
}

#[test]
fn bump_removal_is_major_in_json() {
    let value = stdout_json(&[
        "bump",
        "--output",
        "json",
        "fixtures/base.json",
        "fixtures/removed.json",
    ]);
    assert_eq!(value["bump"], "major");
    assert_eq!(value["base_version"], "1.0.0");
    assert_eq!(value["next_version"], "2.0.0");
}

#[test]
fn bump_metadata_change_is_patch() {
    tokenlist()
        .args(["bump", "fixtures/base.json", "fixtures/patched.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("patch (1.0.0 -> 1.0.1)"));
}

#[test]
fn bump_from_bare_array_has_no_version() {
    tokenlist()
        .args(["bump", "fixtures/tokens.json", "fixtures/base.json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("minor\n"));
}

// ──────────────────────────────────────────────
// 4. Check subcommand
// ──────────────────────────────────────────────

#[test]
fn check_sufficient_version_exits_0() {
    tokenlist()
        .args(["check", "fixtures/base.json", "fixtures/added.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok"));
}

#[test]
fn check_insufficient_version_exits_1() {
    tokenlist()
        .args(["check", "fixtures/base.json", "fixtures/removed.json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("insufficient"))
        .stdout(predicate::str::contains("minimum 2.0.0"));
}

#[test]
fn check_json_reports_verdict() {
    let value = stdout_json(&[
        "check",
        "--output",
        "json",
        "fixtures/base.json",
        "fixtures/patched.json",
    ]);
    assert_eq!(value["required"], "patch");
    assert_eq!(value["declared"], "patch");
    assert_eq!(value["sufficient"], true);
}

#[test]
fn check_requires_documents() {
    tokenlist()
        .args(["check", "fixtures/base.json", "fixtures/tokens.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bare token array"));
}

// ──────────────────────────────────────────────
// 5. Compare and next subcommands
// ──────────────────────────────────────────────

#[test]
fn compare_major_update() {
    tokenlist()
        .args(["compare", "1.0.0", "2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ordering: -1"))
        .stdout(predicate::str::contains("update: true"))
        .stdout(predicate::str::contains("upgrade: major"));
}

#[test]
fn compare_downgrade_json() {
    let value = stdout_json(&["--output", "json", "compare", "2.0.0", "1.9.9"]);
    assert_eq!(value["ordering"], 1);
    assert_eq!(value["is_update"], false);
    assert_eq!(value["upgrade"], "none");
}

#[test]
fn compare_equal_versions() {
    tokenlist()
        .args(["compare", "1.0.0", "1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ordering: 0"))
        .stdout(predicate::str::contains("upgrade: none"));
}

#[test]
fn next_applies_bump() {
    tokenlist()
        .args(["next", "1.2.3", "minor"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1.3.0\n"));
}

#[test]
fn next_unknown_bump_is_usage_error() {
    tokenlist()
        .args(["next", "1.2.3", "huge"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown version upgrade"));
}

#[test]
fn next_malformed_version_is_usage_error() {
    tokenlist()
        .args(["next", "1.2", "patch"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid version"));
}

#[test]
fn next_at_maximum_component_exits_1() {
    tokenlist()
        .args(["next", "18446744073709551615.0.0", "major"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("overflows"));
}

#[test]
fn next_below_maximum_component_still_resets() {
    tokenlist()
        .args(["next", "1.2.18446744073709551615", "minor"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1.3.0\n"));
}

/// Write `fixtures/base.json` with its version replaced.
fn base_with_version(dir: &TempDir, major: u64, minor: u64, patch: u64) -> PathBuf {
    let src = fs::read_to_string(workspace_root().join("fixtures/base.json")).unwrap();
    let mut doc: serde_json::Value = serde_json::from_str(&src).unwrap();
    doc["version"] = serde_json::json!({ "major": major, "minor": minor, "patch": patch });
    let path = dir.path().join(format!("base-{}-{}-{}.json", major, minor, patch));
    fs::write(&path, doc.to_string()).unwrap();
    path
}

#[test]
fn bump_and_check_report_version_overflow() {
    let tmp = TempDir::new().unwrap();
    let base = base_with_version(&tmp, u64::MAX, 0, 0);

    tokenlist()
        .args(["bump", base.to_str().unwrap(), "fixtures/removed.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("overflows"));

    tokenlist()
        .args(["check", base.to_str().unwrap(), "fixtures/removed.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("overflows"));
}
