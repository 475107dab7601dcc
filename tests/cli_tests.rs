#![cfg(feature = "cli_api")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

#[test]
fn cli_summary_reflects_entered_costs() {
    run_cli("info contract 100000000\nout add SubCo 60000000\nsummary\nquit\n")
        .success()
        .stdout(str_contains("Total cost         : 69000000"))
        .stdout(str_contains("Profit rate        : 31.0%"));
}

#[test]
fn cli_compare_flags_over_budget_bucket() {
    run_cli("budget design_labor 5000000\nworker ext Hong 550000 10 design\ncompare\nquit\n")
        .success()
        .stdout(str_contains("Design labor"))
        .stdout(str_contains("over"));
}

#[test]
fn cli_rejects_unknown_budget_field() {
    run_cli("budget man_hour_cost 1000\nquit\n")
        .success()
        .stdout(str_contains("Unknown field"));
}

#[test]
fn cli_save_and_load_json_round_trip() {
    let tmp = NamedTempFile::new().expect("create temp file");
    let path = tmp.path().to_string_lossy().replace('\\', "\\\\");
    let script = format!(
        "info name Plant2\nout add SubCo 1000000\nsave {}\nreset\nload {}\nshow\nquit\n",
        path, path
    );
    let assert = run_cli(&script).success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("Loaded from"), "expected load completion");
    let after_reload = output.split("Loaded from").last().unwrap_or_default();
    assert!(
        after_reload.contains("Plant2"),
        "persisted project should survive reset:\n{}",
        after_reload
    );
}

#[test]
fn cli_imports_delimited_worker_file() {
    let tmp = NamedTempFile::new().expect("create temp file");
    std::fs::write(
        tmp.path(),
        "이름,일당,투입일수,비용항목\nHong,250000,10,design\n",
    )
    .expect("write worker file");
    let path = tmp.path().to_string_lossy().replace('\\', "\\\\");
    run_cli(&format!("import {}\nshow\nquit\n", path))
        .success()
        .stdout(str_contains("Imported 1 workers"))
        .stdout(str_contains("External workers   : 1"));
}

#[test]
fn cli_hire_from_roster() {
    let assert = run_cli("emp add Kim 3300000\nemp list\nquit\n").success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("Kim"), "roster entry should be listed");
    assert!(output.contains("salary=3300000"));
}
