mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::fixture_path;
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn test_print_plain_writes_report() {
    let mut cmd = cargo_bin_cmd!("covview");
    let output = cmd
        .arg("print")
        .arg(fixture_path("single_target.json"))
        .arg("--plain")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        indoc! {"
            Code Coverage
            Covered lines: 80
            Executable lines: 100
            Total Coverage: 80.00%

            Target: T.app
              F.swift — 80.00% — 80 / 100
        "}
    );
}

#[test]
fn test_print_never_colors_when_no_color_set() {
    let mut cmd = cargo_bin_cmd!("covview");
    let output = cmd
        .arg("print")
        .arg(fixture_path("multi_target.json"))
        .args(["--color", "always"])
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains('\u{1b}'));
    assert!(stdout.contains("Target: CoreTests.xctest"));
}

#[test]
fn test_print_invalid_report_fails() {
    let mut cmd = cargo_bin_cmd!("covview");
    let output = cmd
        .arg("print")
        .arg(fixture_path("missing_field.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing_field.json"));
}

#[test]
fn test_print_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("covview");
    let output = cmd
        .arg("print")
        .arg(dir.path().join("nope.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_explicit_config_must_parse() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[picker\nshow_hidden = ").unwrap();

    let mut cmd = cargo_bin_cmd!("covview");
    let output = cmd
        .args(["--config"])
        .arg(&config)
        .arg("print")
        .arg(fixture_path("single_target.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Failed to load config"));
}
