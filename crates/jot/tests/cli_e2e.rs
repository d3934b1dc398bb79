#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn jot_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("jot"));
    cmd.env_remove("JOT_DATA")
        .env_remove("RUST_LOG")
        .arg("--data")
        .arg(data.path());
    cmd
}

#[test]
fn test_create_list_update_delete() {
    let data = TempDir::new().unwrap();

    jot_cmd(&data)
        .args(["create", "Groceries", "-c", "eggs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: Groceries"));

    jot_cmd(&data)
        .args(["create", "Todo"])
        .assert()
        .success();

    // Newest first
    jot_cmd(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Todo"))
        .stdout(predicate::str::contains("2. Groceries eggs"));

    jot_cmd(&data)
        .args(["update", "2", "-c", "eggs and milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated (2): Groceries"));

    jot_cmd(&data)
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eggs and milk"));

    jot_cmd(&data)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted (1): Todo"));

    // Naked invocation lists
    jot_cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Groceries"))
        .stdout(predicate::str::contains("Todo").not());
}

#[test]
fn test_list_json() {
    let data = TempDir::new().unwrap();
    jot_cmd(&data)
        .args(["create", "A", "-c", "x"])
        .assert()
        .success();

    let output = jot_cmd(&data).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &listed[0];
    assert_eq!(first["index"], 1);
    assert_eq!(first["title"], "A");
    assert_eq!(first["content"], "x");
    assert!(first["id"].is_string());
}

#[test]
fn test_session_saves_on_quit() {
    let data = TempDir::new().unwrap();

    jot_cmd(&data)
        .args(["session"])
        .write_stdin("title A\ncontent x\nsave\nquit\n")
        .assert()
        .success();

    let stored = fs::read_to_string(data.path().join("notes.json")).unwrap();
    let notes: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["title"], "A");
    assert_eq!(notes[0]["content"], "x");
}

#[test]
fn test_session_flushes_on_eof() {
    let data = TempDir::new().unwrap();
    jot_cmd(&data)
        .args(["create", "Old"])
        .assert()
        .success();

    jot_cmd(&data)
        .args(["session"])
        .write_stdin("open 1\nappend more\n")
        .assert()
        .success();

    jot_cmd(&data)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("more"));
}

#[test]
fn test_session_delete_then_quit_leaves_nothing() {
    let data = TempDir::new().unwrap();
    jot_cmd(&data)
        .args(["create", "Doomed"])
        .assert()
        .success();

    jot_cmd(&data)
        .args(["session"])
        .write_stdin("open 1\ntitle edited\ndelete\nquit\n")
        .assert()
        .success();

    jot_cmd(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn test_path_and_config_storage_key() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("jot.toml"), "storage_key = \"scratch\"\n").unwrap();

    jot_cmd(&data)
        .args(["path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scratch.json"));
}

#[test]
fn test_unknown_note_fails() {
    let data = TempDir::new().unwrap();
    jot_cmd(&data)
        .args(["view", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_legacy_numeric_ids_load() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("notes.json"),
        r#"[{"id": 481516, "title": "Legacy", "content": "from before"}]"#,
    )
    .unwrap();

    jot_cmd(&data)
        .args(["view", "id:481516"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from before"));
}
