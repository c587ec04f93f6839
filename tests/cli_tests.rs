//! CLI integration tests using the real aur binary

mod common;

use common::{aur_cmd, rpc_server};
use predicates::prelude::*;
use tempfile::TempDir;

const SEARCH_BODY: &str = r#"{
    "resultcount": 3,
    "results": [
        {"Name": "paru", "PackageBase": "paru", "Version": "2.0.4-1", "Description": "Feature packed AUR helper", "Maintainer": "Morganamilo", "NumVotes": 900, "Popularity": 10.0},
        {"Name": "yay", "PackageBase": "yay", "Version": "12.3.5-1", "Description": "Yet another yogurt", "Maintainer": "jguer", "NumVotes": 2000, "Popularity": 20.0},
        {"Name": "aurutils", "PackageBase": "aurutils", "Version": "19.5-1", "Description": "helper tools for the aur", "Maintainer": "Alad", "NumVotes": 500, "Popularity": 10.0, "OutOfDate": 1700000000}
    ],
    "type": "search",
    "version": 5
}"#;

#[test]
fn test_help_output() {
    let temp = TempDir::new().unwrap();
    aur_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("local pacman repository"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("clean"));
}

#[test]
fn test_sync_help_lists_build_flags() {
    let temp = TempDir::new().unwrap();
    aur_cmd(temp.path())
        .args(["sync", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--devel"))
        .stdout(predicate::str::contains("--force"))
        .stdout(predicate::str::contains("--noedit"));
}

#[test]
fn test_unknown_operation_fails() {
    let temp = TempDir::new().unwrap();
    aur_cmd(temp.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn test_sync_requires_names() {
    let temp = TempDir::new().unwrap();
    aur_cmd(temp.path()).arg("sync").assert().failure();
}

#[test]
fn test_remove_requires_names() {
    let temp = TempDir::new().unwrap();
    aur_cmd(temp.path()).arg("remove").assert().failure();
}

#[test]
fn test_search_orders_by_popularity_then_votes() {
    let temp = TempDir::new().unwrap();
    let (url, server) = rpc_server(SEARCH_BODY);

    let output = aur_cmd(temp.path())
        .env("AUR_RPC_URL", &url)
        .args(["search", "helper"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let request_line = server.join().unwrap();
    assert!(request_line.starts_with("GET /rpc/v5/search/helper "));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let aurutils = stdout.find("aur/aurutils").unwrap();
    let paru = stdout.find("aur/paru").unwrap();
    let yay = stdout.find("aur/yay").unwrap();
    assert!(aurutils < paru);
    assert!(paru < yay);
    assert!(stdout.contains("2023-11-14"));
    assert!(stdout.contains("    Feature packed AUR helper"));
}

#[test]
fn test_sync_unknown_target_fails() {
    let temp = TempDir::new().unwrap();
    let (url, server) =
        rpc_server(r#"{"resultcount": 0, "results": [], "type": "multiinfo", "version": 5}"#);

    aur_cmd(temp.path())
        .env("AUR_RPC_URL", &url)
        .args(["sync", "--noedit", "nope", "missing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("target not found: missing nope"));

    let request_line = server.join().unwrap();
    assert!(request_line.contains("arg%5B%5D=nope"));
    assert!(!temp.path().join("nope").exists());
}

#[test]
fn test_registry_unreachable_is_error() {
    let temp = TempDir::new().unwrap();
    aur_cmd(temp.path())
        .args(["search", "paru"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: "));
}

#[test]
fn test_clean_without_cache_dir() {
    let temp = TempDir::new().unwrap();
    aur_cmd(&temp.path().join("cache"))
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned 0 mirrors, removed 0 entries"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    aur_cmd(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aur"));
}

#[test]
fn test_completions_unknown_shell() {
    let temp = TempDir::new().unwrap();
    aur_cmd(temp.path())
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}
