use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Binary under test, pointed at an isolated config file.
fn class_tree_viewer(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("class-tree-viewer").unwrap();
    cmd.arg("--config").arg(config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn shows_help() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classification decision trees"));
}

#[test]
fn shows_version() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn dump_subcommand_help() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .args(["dump", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text table"));
}

#[test]
fn dump_prints_table_and_counts() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("dump")
        .arg(fixture("weather.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("- <root>"))
        .stdout(predicate::str::contains("outlook = overcast"))
        .stdout(predicate::str::contains("Number of nodes: 8"))
        .stdout(predicate::str::contains("Number of leaves: 5"));
}

#[test]
fn dump_with_level_hides_deep_rows() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("dump")
        .arg(fixture("weather.json"))
        .args(["--level", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ outlook = sunny"))
        .stdout(predicate::str::contains("humidity").not());
}

#[test]
fn dump_selected_columns() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("dump")
        .arg(fixture("weather.json"))
        .args(["-C", "instance_count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#Inst"))
        .stdout(predicate::str::contains("P(Class)").not());
}

#[test]
fn dump_rejects_unknown_column() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("dump")
        .arg(fixture("weather.json"))
        .args(["-C", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown column"));
}

#[test]
fn dump_rejects_continuous_class() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("dump")
        .arg(fixture("housing_regression.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("discrete classes"));
}

#[test]
fn dump_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .args(["dump", "/nonexistent/tree.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/tree.json"));
}

#[test]
fn rule_for_nested_node() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("rule")
        .arg(fixture("weather.json"))
        .args(["--node", "0,1"])
        .assert()
        .success()
        .stdout("IF humidity >75 AND\n    outlook = sunny\nTHEN play = no\n");
}

#[test]
fn rule_for_root() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("rule")
        .arg(fixture("weather.json"))
        .assert()
        .success()
        .stdout("play = yes\n");
}

#[test]
fn rule_with_examples() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("rule")
        .arg(fixture("weather.json"))
        .args(["--node", "1", "--examples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IF outlook = overcast"))
        .stdout(predicate::str::contains("\"overcast\""));
}

#[test]
fn rule_unknown_node_fails() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("rule")
        .arg(fixture("weather.json"))
        .args(["--node", "1,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node not found: 1,0"));
}

#[test]
fn dump_does_not_write_config() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .arg("dump")
        .arg(fixture("weather.json"))
        .args(["--target", "no"])
        .assert()
        .success();

    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    class_tree_viewer(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("class-tree-viewer"));
}
