//! Config layering and catalog selection through the binary.
//!
//! - `settings` prints the config hash, canonical JSON and the effective view
//! - a catalog path from config replaces the bundled menu
//! - an unreadable catalog leaves an empty form plus the load-failure notice
//! - `--strict-config` turns unknown keys into a startup failure

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[allow(deprecated)]
fn menu() -> Command {
    let mut cmd = Command::cargo_bin("menu").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn about_prints_version_notice() {
    menu()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[About] Menu App\nVersion "));
}

#[test]
fn bundled_catalog_renders_every_category() {
    menu()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Burgers ==  limit 4  Remaining: 4"))
        .stdout(predicate::str::contains("== Sides ==  limit 8  Remaining: 8"))
        .stdout(predicate::str::contains("== Drinks =="))
        .stdout(predicate::str::contains("== Desserts ==  limit 2"));
}

#[test]
fn layered_config_points_at_catalog_and_default_limit() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("menu.json");
    fs::write(
        &catalog,
        r#"[{"category":"Snacks","items":[{"name":"Chips","price":"$1"}]}]"#,
    )
    .unwrap();

    let base = dir.path().join("base.yaml");
    fs::write(&base, "catalog:\n  default_limit: 8\n").unwrap();
    let over = dir.path().join("local.yaml");
    fs::write(
        &over,
        format!(
            "catalog:\n  path: {}\n  default_limit: 3\n",
            catalog.display()
        ),
    )
    .unwrap();

    menu()
        .arg("--config")
        .arg(&base)
        .arg("--config")
        .arg(&over)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Snacks ==  limit 3  Remaining: 3"))
        .stdout(predicate::str::contains("Burgers").not());
}

#[test]
fn unreadable_catalog_notice_and_empty_form() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("cfg.yaml");
    fs::write(
        &cfg,
        format!("catalog:\n  path: {}\n", dir.path().join("gone.json").display()),
    )
    .unwrap();

    menu()
        .arg("--config")
        .arg(&cfg)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Error] Unable to load menu data."))
        .stdout(predicate::str::contains("(no menu items)"));
}

#[test]
fn settings_prints_hash_and_effective_values() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("cfg.yaml");
    fs::write(&cfg, "export:\n  default_file_name: orders.csv\n").unwrap();

    menu()
        .arg("--config")
        .arg(&cfg)
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::is_match("config_hash=[0-9a-f]{64}\n").unwrap())
        .stdout(predicate::str::contains("\"export_file_name\": \"orders.csv\""))
        .stdout(predicate::str::contains("\"default_limit\": 8"));
}

#[test]
fn strict_config_rejects_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("cfg.yaml");
    fs::write(&cfg, "catalog:\n  default_limt: 3\n").unwrap();

    menu()
        .arg("--config")
        .arg(&cfg)
        .arg("--strict-config")
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_UNUSED_KEYS"));

    menu()
        .arg("--config")
        .arg(&cfg)
        .arg("catalog")
        .assert()
        .success()
        .stderr(predicate::str::contains("unused=/catalog/default_limt"));
}
