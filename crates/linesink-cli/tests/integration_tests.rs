//! Integration tests for linesink-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn linesink() -> Command {
    Command::cargo_bin("linesink").unwrap()
}

// ── CLI surface ───────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    linesink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emit lines"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    linesink()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    linesink().assert().failure().code(2);
}

#[test]
fn emit_help_mentions_sink_flags() {
    linesink()
        .args(["emit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--sink"))
        .stdout(predicate::str::contains("--path"))
        .stdout(predicate::str::contains("--append"));
}

// ── console sink ──────────────────────────────────────────────────────────────

#[test]
fn emit_single_line() {
    linesink()
        .args(["emit", "done"])
        .assert()
        .success()
        .stdout("done\n");
}

#[test]
fn emit_preserves_order_and_empty_lines() {
    linesink()
        .args(["emit", "alpha", "", "beta"])
        .assert()
        .success()
        .stdout("alpha\n\nbeta\n");
}

#[test]
fn emit_reads_lines_from_stdin() {
    linesink()
        .arg("emit")
        .write_stdin("alpha\nbeta\n")
        .assert()
        .success()
        .stdout("alpha\nbeta\n");
}

#[test]
fn emit_with_empty_stdin_writes_nothing() {
    linesink()
        .arg("emit")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn emit_alias_works() {
    linesink()
        .args(["e", "done"])
        .assert()
        .success()
        .stdout("done\n");
}

// ── null sink ─────────────────────────────────────────────────────────────────

#[test]
fn null_sink_prints_nothing() {
    linesink()
        .args(["emit", "--sink", "null", "loud", "lines"])
        .assert()
        .success()
        .stdout("");
}

// ── file sink ─────────────────────────────────────────────────────────────────

#[test]
fn file_sink_writes_lines() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");

    linesink()
        .args(["emit", "--sink", "file", "--path"])
        .arg(&path)
        .args(["alpha", "", "beta"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\n\nbeta\n");
}

#[test]
fn file_sink_truncates_by_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");
    fs::write(&path, "stale\n").unwrap();

    linesink()
        .args(["emit", "--sink", "file", "--path"])
        .arg(&path)
        .arg("fresh")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
}

#[test]
fn file_sink_appends_with_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");
    fs::write(&path, "first\n").unwrap();

    linesink()
        .args(["emit", "--sink", "file", "--append", "--path"])
        .arg(&path)
        .arg("second")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}

#[test]
fn file_sink_without_path_is_a_user_error() {
    linesink()
        .args(["emit", "--sink", "file", "line"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--path"));
}

#[test]
fn unknown_sink_value_is_rejected_by_clap() {
    linesink()
        .args(["emit", "--sink", "teletype", "line"])
        .assert()
        .failure()
        .code(2);
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn config_file_selects_default_sink() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[defaults]\nsink = \"null\"\n").unwrap();

    linesink()
        .args(["--config"])
        .arg(&config)
        .args(["emit", "swallowed"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn config_file_supplies_file_sink_path() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("configured.txt");
    let config = temp.path().join("config.toml");
    fs::write(
        &config,
        format!("[defaults]\nsink = \"file\"\npath = \"{}\"\n", out.display()),
    )
    .unwrap();

    linesink()
        .args(["--config"])
        .arg(&config)
        .args(["emit", "routed"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "routed\n");
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    linesink()
        .args(["--config", "/nonexistent/linesink.toml", "emit", "x"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn invalid_default_sink_in_config_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[defaults]\nsink = \"teletype\"\n").unwrap();

    linesink()
        .args(["--config"])
        .arg(&config)
        .args(["emit", "x"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("teletype"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_generates_script() {
    linesink()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linesink"));
}
