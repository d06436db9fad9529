//! End-to-end CLI tests against a temp config and inventory draft.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn portdeck(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("portdeck").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--inventory")
        .arg(dir.path().join("inventory.json"));
    cmd
}

#[test]
fn vlan_list_shows_the_builtin_catalogue() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["vlan", "list", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("503"))
        .stdout(predicate::str::contains("999"));
}

#[test]
fn switch_add_then_list_round_trips_through_the_draft() {
    let dir = TempDir::new().unwrap();

    portdeck(&dir)
        .args(["switch", "add", "--name", "idf-1", "--location", "Building A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added switch"));

    portdeck(&dir)
        .args(["switch", "list", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());

    portdeck(&dir)
        .args(["switch", "show", "idf-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Building A"))
        .stdout(predicate::str::contains("Ports:     52"));
}

#[test]
fn switch_list_table_renders_record_cells() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["switch", "add", "--name", "idf-5", "--location", "Building B"])
        .assert()
        .success();

    // Default format is table; row cells come from the record fields.
    portdeck(&dir)
        .args(["switch", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("idf-5"))
        .stdout(predicate::str::contains("Building B"))
        .stdout(predicate::str::contains("Pending"));
}

#[test]
fn vlan_list_table_renders_catalogue_names() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["vlan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Management"))
        .stdout(predicate::str::contains("Quarantine"));
}

#[test]
fn read_only_session_rejects_mutations_with_permission_exit_code() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["--read-only", "switch", "add", "--name", "nope"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn generate_renders_hpe_script_for_a_seeded_switch() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["switch", "add", "--name", "idf-2"])
        .assert()
        .success();

    portdeck(&dir)
        .args(["generate", "idf-2", "--vendor", "hpe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("! switch    : idf-2"))
        .stdout(predicate::str::contains("interface 1/0/1"))
        .stdout(predicate::str::contains("untagged vlan 503"))
        .stdout(predicate::str::contains("interface 2/0/4"));
}

#[test]
fn generate_works_even_in_a_read_only_session() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["switch", "add", "--name", "frozen"])
        .assert()
        .success();

    portdeck(&dir)
        .args(["--read-only", "generate", "frozen", "--vendor", "cisco"])
        .assert()
        .success()
        .stdout(predicate::str::contains("switchport mode access"));
}

#[test]
fn bulk_edit_is_visible_in_generated_output() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["switch", "add", "--name", "idf-3"])
        .assert()
        .success();

    portdeck(&dir)
        .args([
            "port", "bulk", "idf-3", "--ports", "1,2,3", "--untagged", "501",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated 3 port(s)"));

    portdeck(&dir)
        .args(["generate", "idf-3", "--vendor", "hpe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("untagged vlan 501"));
}

#[test]
fn unknown_switch_exits_with_not_found() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["switch", "show", "ghost"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn generate_without_vendor_or_default_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    portdeck(&dir)
        .args(["switch", "add", "--name", "idf-4"])
        .assert()
        .success();

    portdeck(&dir)
        .args(["generate", "idf-4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no vendor selected"));
}
