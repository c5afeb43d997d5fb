use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

fn lh2gh() -> Command {
    Command::cargo_bin("lh2gh").unwrap()
}

fn export_root(tmp: &Path) -> PathBuf {
    let src = tmp.join("export");
    fs::create_dir_all(src.join("tickets")).unwrap();
    fs::create_dir_all(src.join("milestones")).unwrap();
    src
}

fn write_minimal_ticket(src: &Path, dir_name: &str, number: u64) {
    let dir = src.join("tickets").join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    let ticket = json!({
        "ticket": {
            "number": number,
            "title": "A ticket",
            "latest_body": "hello #2",
            "creator_name": "Daniele",
            "created_at": "2011-03-20T01:07:40-07:00",
            "updated_at": "2011-03-20T01:07:40-07:00",
            "closed": false,
            "spam": false,
            "state": "new",
            "tag": null,
            "milestone_id": null,
            "versions": []
        }
    });
    fs::write(dir.join("ticket.json"), ticket.to_string()).unwrap();
}

#[test]
fn converts_an_export_from_the_command_line() {
    let tmp = tempdir().unwrap();
    let src = export_root(tmp.path());
    write_minimal_ticket(&src, "1-a-ticket", 1);
    let dest = tmp.path().join("out");

    lh2gh().arg(&src).arg(&dest).assert().success();
    assert!(dest.join("issues/1.json").exists());
    assert!(dest.join("milestones").is_dir());
}

#[test]
fn remap_flags_shift_the_output_files() {
    let tmp = tempdir().unwrap();
    let src = export_root(tmp.path());
    write_minimal_ticket(&src, "1-a-ticket", 1);
    let dest = tmp.path().join("out");

    lh2gh()
        .arg(&src)
        .arg(&dest)
        .args(["--remap-until", "100", "--remap-offset", "1000"])
        .assert()
        .success();
    assert!(dest.join("issues/1001.json").exists());

    let issue = fs::read_to_string(dest.join("issues/1001.json")).unwrap();
    assert!(issue.contains("hello #1002"));
    assert!(issue.contains("Originally submitted as number 1"));
}

#[test]
fn refuses_to_write_into_a_populated_directory() {
    let tmp = tempdir().unwrap();
    let src = export_root(tmp.path());
    let dest = tmp.path().join("out");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("stale.json"), "{}").unwrap();

    lh2gh()
        .arg(&src)
        .arg(&dest)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty directory"));
}

#[test]
fn lone_remap_flag_is_a_usage_error() {
    let tmp = tempdir().unwrap();
    lh2gh()
        .arg(tmp.path().join("src"))
        .arg(tmp.path().join("out"))
        .args(["--remap-until", "100"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--remap-offset"));
}

#[test]
fn bad_user_map_line_is_reported_with_its_number() {
    let tmp = tempdir().unwrap();
    let src = export_root(tmp.path());
    let map = tmp.path().join("users.tsv");
    fs::write(&map, "Daniele\tdvarrazzo\nno tab in sight\n").unwrap();

    lh2gh()
        .arg(&src)
        .arg(tmp.path().join("out"))
        .arg("--user-map")
        .arg(&map)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("users.tsv:2"));
}

#[test]
fn missing_export_directory_is_an_error() {
    let tmp = tempdir().unwrap();
    lh2gh()
        .arg(tmp.path().join("nowhere"))
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}
