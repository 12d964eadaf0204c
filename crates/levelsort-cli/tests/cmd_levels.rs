//! Integration tests for `levelsort levels`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Path to the compiled `levelsort` binary.
fn levelsort_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("levelsort");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn levels(args: &[&str]) -> std::process::Output {
    Command::new(levelsort_bin())
        .arg("levels")
        .args(args)
        .output()
        .expect("run levelsort levels")
}

// ---------------------------------------------------------------------------
// levels: human mode
// ---------------------------------------------------------------------------

#[test]
fn levels_diamond_human() {
    let out = levels(&[fixture("diamond.json").to_str().expect("path")]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "level 0: A\nlevel 1: B, C\nlevel 2: D\n");
}

#[test]
fn levels_disconnected_roots_share_level_0() {
    let out = levels(&[fixture("disconnected.json").to_str().expect("path")]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "level 0: A, X\nlevel 1: Y\n");
}

#[test]
fn levels_pipeline_follows_longest_path() {
    let out = levels(&[fixture("pipeline.json").to_str().expect("path")]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "level 0: fetch\n\
         level 1: compile-core, lint\n\
         level 2: compile-cli, test-core, docs\n\
         level 3: test-cli\n\
         level 4: package\n\
         level 5: publish\n"
    );
}

#[test]
fn levels_max_group_size_splits() {
    let out = levels(&[
        fixture("pipeline.json").to_str().expect("path"),
        "--max-group-size",
        "2",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("level 2: compile-cli, test-core\n"), "{stdout}");
    assert!(stdout.contains("level 3: docs\n"), "{stdout}");
}

// ---------------------------------------------------------------------------
// levels: JSON mode
// ---------------------------------------------------------------------------

#[test]
fn levels_json_is_structured() {
    let out = levels(&[
        fixture("diamond.json").to_str().expect("path"),
        "--format",
        "json",
    ]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["level_count"], 3);
    assert_eq!(value["node_count"], 4);
    assert_eq!(
        value["levels"],
        serde_json::json!([["A"], ["B", "C"], ["D"]])
    );
}

// ---------------------------------------------------------------------------
// levels: stdin
// ---------------------------------------------------------------------------

#[test]
fn levels_reads_stdin() {
    let mut child = Command::new(levelsort_bin())
        .args(["levels", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn levelsort");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(br#"{"b": [], "a": ["b"]}"#)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "level 0: a\nlevel 1: b\n");
}

// ---------------------------------------------------------------------------
// levels: failures
// ---------------------------------------------------------------------------

#[test]
fn levels_cycle_exits_1_without_partial_output() {
    let out = levels(&[fixture("cycle.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "no partial levels on stdout");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cycle"), "stderr: {stderr}");
}

#[test]
fn levels_undeclared_dependent_exits_2() {
    let out = levels(&[fixture("undeclared.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ghost"), "stderr: {stderr}");
}

#[test]
fn levels_undeclared_dependent_auto_registered() {
    let out = levels(&[
        fixture("undeclared.json").to_str().expect("path"),
        "--auto-register",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "level 0: compile\nlevel 1: test, ghost\n");
}

#[test]
fn levels_malformed_json_exits_2() {
    let out = levels(&[fixture("malformed.json").to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn levels_missing_file_exits_2() {
    let out = levels(&["/no/such/graph.json"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn levels_file_over_size_limit_exits_2() {
    let out = levels(&[
        fixture("pipeline.json").to_str().expect("path"),
        "--max-file-size",
        "10",
    ]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too large"), "stderr: {stderr}");
}
