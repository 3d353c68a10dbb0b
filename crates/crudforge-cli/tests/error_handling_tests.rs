//! Exit codes and error messages.

mod common;

use std::fs;

use predicates::prelude::*;

use common::{Workspace, crudforge};

#[test]
fn test_gen_requires_entity() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("gen")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("ENTITY"));
}

#[test]
fn test_gen_invalid_entity_name() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["gen", "123abc", "--no-db"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!ws.api().join("src/modules").exists());
}

#[test]
fn test_new_into_existing_folder() {
    let temp = tempfile::TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();

    crudforge(temp.path(), temp.path())
        .args(["new", "taken", "--skip-install"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_invalid_name() {
    let temp = tempfile::TempDir::new().unwrap();

    crudforge(temp.path(), temp.path())
        .args(["new", "../escape", "--skip-install"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_new_missing_template_directory() {
    let temp = tempfile::TempDir::new().unwrap();

    crudforge(temp.path(), temp.path())
        .args(["new", "app", "--skip-install", "--template", "does-not-exist"])
        .assert()
        .failure()
        .code(3);

    assert!(!temp.path().join("app").exists());
}

#[test]
fn test_explicit_missing_config_file() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["--config", "nope.toml", "gen", "Produto", "--no-db"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["config", "get", "nope.key"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("generate.table_prefix"));
}

#[test]
fn test_help_and_version() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gen"))
        .stdout(predicate::str::contains("new"));
    ws.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_shell_completions() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudforge"));
}

#[test]
fn test_config_get_and_init() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["config", "get", "generate.table_prefix"])
        .assert()
        .success()
        .stdout(predicate::str::diff("app_\n"));

    ws.cmd().args(["init", "--local"]).assert().success();
    assert!(ws.api().join("crudforge.toml").is_file());

    ws.cmd()
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}
