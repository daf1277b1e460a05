use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn stylish_report() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("stylish-report")
}

const ERROR_RESULTS: &str = r#"[
  {
    "filePath": "foo.scss",
    "errorCount": 1,
    "warningCount": 0,
    "messages": [
      { "message": "Unexpected foo.", "severity": 2, "line": 5, "column": 10, "ruleId": "foo" }
    ]
  }
]"#;

const WARNING_RESULTS: &str = r#"[
  {
    "filePath": "foo.scss",
    "errorCount": 0,
    "warningCount": 1,
    "messages": [
      { "message": "Unexpected foo.", "severity": 1, "line": 5, "column": 10, "ruleId": "foo" }
    ]
  }
]"#;

const CLEAN_RESULTS: &str = r#"[
  { "filePath": "foo.scss", "errorCount": 0, "warningCount": 0, "messages": [] }
]"#;

fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn errors_print_report_and_exit_1() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "results.json", ERROR_RESULTS);

    stylish_report()
        .args([input.to_str().unwrap(), "--color", "never"])
        .assert()
        .code(1)
        .stdout(
            "\nfoo.scss\n  5:10  error  Unexpected foo  foo\n\n✖ 1 problem (1 error, 0 warnings)\n",
        );
}

#[test]
fn warnings_alone_pass() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "results.json", WARNING_RESULTS);

    stylish_report()
        .args([input.to_str().unwrap(), "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✖ 1 problem (0 errors, 1 warning)"));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "results.json", WARNING_RESULTS);

    stylish_report()
        .args([input.to_str().unwrap(), "--color", "never", "--strict"])
        .assert()
        .code(1);
}

#[test]
fn strict_mode_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "results.json", WARNING_RESULTS);
    let config = write_fixture(dir.path(), "custom.toml", "[strict]\nenabled = true\n");

    stylish_report()
        .args([
            input.to_str().unwrap(),
            "--color",
            "never",
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .code(1);
}

#[test]
fn clean_results_print_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "results.json", CLEAN_RESULTS);

    stylish_report()
        .args([input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn reads_stdin_when_no_input_given() {
    stylish_report()
        .args(["--color", "never"])
        .write_stdin(ERROR_RESULTS)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("foo.scss"));
}

#[test]
fn dash_reads_stdin() {
    stylish_report()
        .args(["-", "--color", "never"])
        .write_stdin(WARNING_RESULTS)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning  Unexpected foo  foo"));
}

#[test]
fn color_always_emits_ansi_summary() {
    stylish_report()
        .args(["--color", "always"])
        .write_stdin(ERROR_RESULTS)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "\x1b[1;31m✖ 1 problem (1 error, 0 warnings)\x1b[0m",
        ));
}

#[test]
fn config_color_never_is_overridden_by_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path(), "custom.toml", "[output]\ncolor = \"never\"\n");

    stylish_report()
        .args(["--config", config.to_str().unwrap(), "--color", "always"])
        .write_stdin(WARNING_RESULTS)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1;33m"));
}

#[test]
fn output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "results.json", ERROR_RESULTS);
    let output_file = dir.path().join("report.txt");

    stylish_report()
        .args([
            input.to_str().unwrap(),
            "--color",
            "never",
            "--output",
            output_file.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Output written to"));

    let content = std::fs::read_to_string(&output_file).unwrap();
    assert!(content.ends_with("✖ 1 problem (1 error, 0 warnings)\n"));
}

#[test]
fn unsupported_severity_exits_2() {
    stylish_report()
        .write_stdin(r#"[{ "filePath": "a.scss", "messages": [{ "message": "x", "severity": 0 }] }]"#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported severity 0"));
}

#[test]
fn malformed_json_exits_2() {
    stylish_report()
        .write_stdin("not json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid lint results"));
}

#[test]
fn nonexistent_input_exits_2() {
    stylish_report()
        .args(["tests/fixtures/does-not-exist.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn missing_config_file_exits_2() {
    stylish_report()
        .args(["--config", "does-not-exist.toml"])
        .write_stdin(CLEAN_RESULTS)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn debug_logs_go_to_stderr() {
    stylish_report()
        .args(["--debug", "--color", "never"])
        .write_stdin(WARNING_RESULTS)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\nfoo.scss\n"))
        .stderr(predicate::str::contains("rendered stylish report"));
}
