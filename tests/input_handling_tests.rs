//! Integration tests for input files and the config file

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::zotmeta_cmd;

fn offline_args() -> [&'static str; 6] {
    // Valid credentials pointing at a closed port: commands that validate
    // inputs first must fail before any connection is attempted
    [
        "--library-id",
        "1",
        "--library-type",
        "user",
        "--api-base",
        "http://127.0.0.1:9",
    ]
}

#[test]
fn test_apply_category_tags_empty_input_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("tags.txt");
    fs::write(&input, "\n  \n").unwrap();

    zotmeta_cmd()
        .args(offline_args())
        .args(["apply-category-tags", "--tag", "ASIA"])
        .arg(&input)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("no tags found"));
}

#[test]
fn test_apply_category_tags_missing_input_file() {
    zotmeta_cmd()
        .args(offline_args())
        .args(["apply-category-tags", "--tag", "ASIA", "/nonexistent/tags.txt"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("cannot read /nonexistent/tags.txt"));
}

#[test]
fn test_apply_category_tags_requires_tag_option() {
    zotmeta_cmd()
        .args(offline_args())
        .args(["apply-category-tags", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--tag"));
}

#[test]
fn test_get_union_missing_axis_file() {
    let temp = TempDir::new().unwrap();
    let x_tags = temp.path().join("x.txt");
    fs::write(&x_tags, "Culture\nHistory\n").unwrap();

    zotmeta_cmd()
        .args(offline_args())
        .arg("get-union")
        .arg(&x_tags)
        .args(["/nonexistent/y.txt", "-"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("cannot read /nonexistent/y.txt"));
}

#[test]
fn test_find_missing_tags_empty_list() {
    let temp = TempDir::new().unwrap();
    let tags_list = temp.path().join("tags.txt");
    fs::write(&tags_list, "").unwrap();

    zotmeta_cmd()
        .args(offline_args())
        .arg("find-missing-tags")
        .arg(&tags_list)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("no tags found"));
}

#[test]
fn test_malformed_config_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "library_id = [not toml").unwrap();

    zotmeta_cmd()
        .env("ZOTMETA_CONFIG", &config)
        .args(["get-tags", "-"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_config_file_supplies_credentials() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(
        &config,
        "library_id = \"1\"\nlibrary_type = \"user\"\napi_base = \"http://127.0.0.1:9\"\n",
    )
    .unwrap();

    // Credentials resolve from the config file, so the command gets past
    // configuration and fails on the unreachable endpoint instead
    zotmeta_cmd()
        .env("ZOTMETA_CONFIG", &config)
        .args(["get-tags", "-"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no library id given").not());
}
