//! Integration tests for the `print` command.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to write a definition file into a temp directory.
fn write_definition(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("varenv.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

fn varenv() -> Command {
    Command::cargo_bin("varenv").expect("Failed to find varenv binary")
}

#[test]
fn test_print_export_format() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        "\
environments: [dev, prod]
variables:
  DEBUG: true
  FOO: [1, {dev: null}]
",
    );

    varenv()
        .args(["print", "prod", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout("# environment: prod\nexport DEBUG=true\nexport FOO=1\n");
}

#[test]
fn test_print_envfile_format() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        "\
environments: [a, b]
variables:
  Y: [null, hello]
",
    );

    varenv()
        .args(["print", "b", "--output", "envfile", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout("# environment: b\nY=\"hello\"\n");

    varenv()
        .args(["print", "a", "--output", "envfile", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout("# environment: a\nY=\n");
}

#[test]
fn test_print_docker_format() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        "\
environments: [dev]
variables:
  HOST: db.local
  PORT: 5432
",
    );

    varenv()
        .args(["print", "dev", "-o", "docker", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout("-e HOST=\"db.local\" -e PORT=5432");
}

#[test]
fn test_print_output_is_name_sorted() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        "\
environments: [dev]
variables:
  ZEBRA: 1
  APPLE: 2
",
    );

    varenv()
        .args(["print", "dev", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout("# environment: dev\nexport APPLE=2\nexport ZEBRA=1\n");
}

#[test]
fn test_print_unknown_environment_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(&dir, "environments: [dev, prod]\n");

    varenv()
        .args(["print", "qa", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("no such environment: qa"));
}

#[test]
fn test_print_cycle_reports_error_per_line() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        "\
environments: [dev, prod]
variables:
  X: [{prod: null}, {dev: null}]
  SHORT: [1]
",
    );

    varenv()
        .args(["print", "dev", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "X: Cyclic environment symbols are detected",
        ))
        .stderr(predicate::str::contains(
            "SHORT: array length must be 2, but 1",
        ));
}

#[test]
fn test_print_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");

    varenv()
        .args(["print", "dev", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_print_file_from_environment_variable() {
    let dir = TempDir::new().unwrap();
    let path = write_definition(
        &dir,
        "environments: [dev]\nvariables:\n  KEY: value\n",
    );

    varenv()
        .env("VARENV_FILE", &path)
        .args(["print", "dev"])
        .assert()
        .success()
        .stdout("# environment: dev\nexport KEY=\"value\"\n");
}
