//! Integration tests for tag filter validation at the CLI boundary
//!
//! Malformed filters must abort before any configuration or network work,
//! so none of these need a reachable library.

use predicates::prelude::*;

mod common;
use common::zotmeta_cmd;

#[test]
fn test_bare_minus_filter_is_malformed() {
    zotmeta_cmd()
        .args(["--tag-filter", "-", "get-tags", "-"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Malformed tag filter: '-'"));
}

#[test]
fn test_empty_filter_is_malformed() {
    zotmeta_cmd()
        .args(["--tag-filter", "", "get-tags", "-"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Malformed tag filter"));
}

#[test]
fn test_blank_or_group_is_malformed() {
    zotmeta_cmd()
        .args(["--tag-filter", "  ||  ", "get-tags", "-"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Malformed tag filter"));
}

#[test]
fn test_malformed_filter_beats_missing_credentials() {
    // No library id or type given: the filter error still wins because
    // filters parse first
    zotmeta_cmd()
        .args(["--tag-filter", "-", "get-union", "x.txt", "y.txt", "-"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Malformed tag filter"));
}

#[test]
fn test_malformed_filter_reports_syntax_help() {
    zotmeta_cmd()
        .args(["--tag-filter", "", "get-tags", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Asia || Europe"));
}

#[test]
fn test_exclusion_filter_is_accepted() {
    // A well-formed exclusion filter passes parsing and fails later on the
    // missing library id instead
    zotmeta_cmd()
        .args(["--tag-filter", "-#exclude", "get-tags", "-"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no library id given"));
}
