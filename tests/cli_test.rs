//! End-to-end CLI tests.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_runbook(yaml: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("runbook.yml"), yaml).unwrap();
    temp
}

fn sh_step(name: &str, script: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("  - name: {}\n    command: [cmd, /C, \"{}\"]\n", name, script)
    } else {
        format!("  - name: {}\n    command: [sh, -c, \"{}\"]\n", name, script)
    }
}

fn two_good_steps() -> String {
    format!(
        "name: Site publish\nsteps:\n{}{}",
        sh_step("update", "exit 0"),
        sh_step("deploy", "exit 0")
    )
}

#[test]
fn no_args_runs_all_steps() {
    let temp = setup_runbook(&two_good_steps());
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[Step 1/2]"))
        .stdout(predicate::str::contains("[Step 2/2]"))
        .stdout(predicate::str::contains("All steps completed successfully"));
}

#[test]
fn start_banner_is_bounded_by_rules() {
    let temp = setup_runbook(&two_good_steps());
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("=".repeat(60)))
        .stdout(predicate::str::contains("Site publish"));
}

#[test]
fn step_labels_print_in_order() {
    let yaml = format!(
        "steps:\n{}{}",
        sh_step("first", "exit 0"),
        sh_step("second", "exit 0")
    );
    let temp = setup_runbook(&yaml);
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let first_pos = text.find("first").unwrap();
    let second_pos = text.find("second").unwrap();
    assert!(first_pos < second_pos);
}

#[test]
fn fail_fast_propagates_exit_code() {
    let temp = setup_runbook(&format!(
        "steps:\n{}{}",
        sh_step("update", "exit 7"),
        sh_step("deploy", "touch deployed.txt")
    ));
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("[ERROR]"))
        .stderr(predicate::str::contains("'update'"));

    // The deploy step never ran.
    assert!(!temp.path().join("deployed.txt").exists());
}

#[test]
fn spawn_failure_exits_127() {
    let temp = setup_runbook(
        "steps:\n  - name: ghost\n    command: [runbook-no-such-program-xyz]\n",
    );
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .code(127)
        .stderr(predicate::str::contains("could not be started"))
        .stderr(predicate::str::contains("'ghost'"));
}

#[test]
fn empty_runbook_succeeds_with_banners_only() {
    let temp = setup_runbook("name: Empty\nsteps: []\n");
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All steps completed successfully"))
        .stdout(predicate::str::contains("[Step").not());
}

#[test]
fn dry_run_spawns_nothing() {
    let temp = setup_runbook(&format!("steps:\n{}", sh_step("boom", "exit 1")));
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.args(["run", "--dry-run"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("would run:"));
}

#[test]
fn only_filter_limits_steps() {
    let temp = setup_runbook(&format!(
        "steps:\n{}{}",
        sh_step("a", "touch a.txt"),
        sh_step("b", "touch b.txt")
    ));
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.args(["run", "--only", "b"]);
    cmd.assert().success();

    assert!(!temp.path().join("a.txt").exists());
    assert!(temp.path().join("b.txt").exists());
}

#[test]
fn skip_filter_drops_steps() {
    let temp = setup_runbook(&format!(
        "steps:\n{}{}",
        sh_step("a", "touch a.txt"),
        sh_step("b", "touch b.txt")
    ));
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.args(["run", "--skip", "a"]);
    cmd.assert().success();

    assert!(!temp.path().join("a.txt").exists());
    assert!(temp.path().join("b.txt").exists());
}

#[test]
fn unknown_filter_name_fails() {
    let temp = setup_runbook(&two_good_steps());
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.args(["run", "--only", "ghost"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown step"));
}

#[cfg(unix)]
#[test]
fn steps_run_in_runbook_dir_not_caller_dir() {
    let runbook_dir = setup_runbook(&format!("steps:\n{}", sh_step("where", "pwd > out.txt")));
    let elsewhere = TempDir::new().unwrap();

    let mut cmd = Command::new(cargo_bin("runbook"));
    // Launch from an unrelated directory, pointing at the runbook explicitly.
    cmd.current_dir(elsewhere.path());
    cmd.args([
        "run",
        "--config",
        runbook_dir.path().join("runbook.yml").to_str().unwrap(),
    ]);
    cmd.assert().success();

    let recorded = fs::read_to_string(runbook_dir.path().join("out.txt")).unwrap();
    let expected = fs::canonicalize(runbook_dir.path()).unwrap();
    assert_eq!(recorded.trim(), expected.to_str().unwrap());
    assert!(!elsewhere.path().join("out.txt").exists());
}

#[test]
fn discovery_walks_up_from_nested_dir() {
    let temp = setup_runbook(&two_good_steps());
    let nested = temp.path().join("site").join("assets");
    fs::create_dir_all(&nested).unwrap();

    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(&nested);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All steps completed successfully"));
}

#[test]
fn no_runbook_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.args(["run"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No runbook found"));
}

#[test]
fn invalid_runbook_reports_parse_error() {
    let temp = setup_runbook("steps: [unclosed");
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse runbook"));
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fail-fast step runner"));
}

#[test]
fn cli_shows_version() {
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn list_prints_steps_in_order() {
    let temp = setup_runbook(&two_good_steps());
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.arg("list");

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let update_pos = text.find("update").unwrap();
    let deploy_pos = text.find("deploy").unwrap();
    assert!(update_pos < deploy_pos);
}

#[test]
fn list_json_is_parseable() {
    let temp = setup_runbook(&two_good_steps());
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.args(["list", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let steps: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(steps.as_array().unwrap().len(), 2);
    assert_eq!(steps[0]["name"], "update");
}

#[test]
fn init_writes_starter_runbook() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.arg("init");
    cmd.assert().success();

    let written = fs::read_to_string(temp.path().join("runbook.yml")).unwrap();
    assert!(written.contains("name: Site publish"));

    // The starter runbook must itself be loadable.
    let mut list = Command::new(cargo_bin("runbook"));
    list.current_dir(temp.path());
    list.arg("list");
    list.assert()
        .success()
        .stdout(predicate::str::contains("Update database"));
}

#[test]
fn init_refuses_overwrite_without_force() {
    let temp = setup_runbook("name: precious\nsteps: []\n");
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.arg("init");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let kept = fs::read_to_string(temp.path().join("runbook.yml")).unwrap();
    assert!(kept.contains("precious"));
}

#[test]
fn init_force_overwrites() {
    let temp = setup_runbook("name: old\nsteps: []\n");
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.current_dir(temp.path());
    cmd.args(["init", "--force"]);
    cmd.assert().success();

    let written = fs::read_to_string(temp.path().join("runbook.yml")).unwrap();
    assert!(written.contains("Site publish"));
}

#[test]
fn completions_generate_for_bash() {
    let mut cmd = Command::new(cargo_bin("runbook"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("runbook"));
}
