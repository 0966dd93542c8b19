//! CLI integration tests
//!
//! These tests run the built binary and check the exact lines it prints and
//! the exit status, including the fatal termination policy.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_svclog");

fn svclog(args: &[&str]) -> Output {
    Command::new(BIN)
        .env_remove("SVCLOG_CONFIG")
        .env_remove("SVCLOG_MIN_LEVEL")
        .env_remove("SVCLOG_DEFAULT_ID")
        .env_remove("SVCLOG_CONSOLE")
        .env_remove("SVCLOG_NO_TIME")
        .env_remove("SVCLOG_NO_EXIT")
        .env_remove("SVCLOG_BACKEND")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_emit_plain_concatenates_parts() {
    let output = svclog(&["--no-time", "--default-id", "X", "emit", "debug", "Hello", "World"]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_lines(&output), vec!["DBG\t[X]\tHelloWorld"]);
}

#[test]
fn test_emit_formatted_with_correlation_id() {
    let output = svclog(&[
        "--no-time",
        "--default-id",
        "X",
        "emit",
        "info",
        "--format",
        "--correlation-id",
        "Y",
        "Hello %s",
        "Universe",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["INF\t[Y]\tHello Universe"]);
}

#[test]
fn test_emit_lone_template_is_verbatim() {
    let output = svclog(&["--no-time", "--default-id", "X", "emit", "warn", "--format", "100%s"]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["WRN\t[X]\t100%s"]);
}

#[test]
fn test_emit_below_threshold_prints_nothing() {
    let output = svclog(&["--no-time", "--min-level", "2", "emit", "warn", "quiet"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_emit_out_of_range_level_logs_as_info() {
    let output = svclog(&["--no-time", "--default-id", "X", "--min-level", "2", "emit", "-1", "m"]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["INF\t[X]\tm"]);
}

#[test]
fn test_emit_timestamp_prefix() {
    let output = svclog(&["--default-id", "X", "emit", "info", "stamped"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let (stamp, rest) = lines[0].split_once('\t').unwrap();
    assert_eq!(stamp.len(), 23);
    assert_eq!(rest, "INF\t[X]\tstamped");
}

#[test]
fn test_console_mode_prints_bare_errors_only() {
    let info = svclog(&["--console", "emit", "info", "hidden"]);
    let error = svclog(&["--console", "emit", "error", "disk ", "full"]);

    assert!(info.stdout.is_empty());
    assert_eq!(stdout_lines(&error), vec!["disk full"]);
}

#[test]
fn test_emit_fatal_exits_with_status_one() {
    let output = svclog(&["--no-time", "--default-id", "X", "emit", "fatal", "boom"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output), vec!["FTL\t[X]\tboom"]);
}

#[test]
fn test_emit_fatal_with_no_exit_succeeds() {
    let output = svclog(&["--no-time", "--no-exit", "--default-id", "X", "emit", "fatal", "boom"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["FTL\t[X]\tboom"]);
}

#[test]
fn test_config_file_with_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("svclog.toml");
    fs::write(
        &config_path,
        "correlation_default = \"from-file\"\nminimum_level = 2\nshow_timestamp = false\n",
    )
    .unwrap();
    let path = config_path.to_str().unwrap();

    let from_file = svclog(&["--config", path, "emit", "error", "e"]);
    let suppressed = svclog(&["--config", path, "emit", "debug", "d"]);
    let overridden = svclog(&["--config", path, "--default-id", "flag", "emit", "error", "e"]);

    assert_eq!(stdout_lines(&from_file), vec!["ERR\t[from-file]\te"]);
    assert!(suppressed.stdout.is_empty());
    assert_eq!(stdout_lines(&overridden), vec!["ERR\t[flag]\te"]);
}

#[test]
fn test_environment_sits_between_file_and_flags() {
    let output = Command::new(BIN)
        .env("SVCLOG_DEFAULT_ID", "from-env")
        .env("SVCLOG_NO_TIME", "true")
        .env_remove("SVCLOG_CONFIG")
        .env_remove("SVCLOG_MIN_LEVEL")
        .args(["emit", "info", "e"])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(stdout_lines(&output), vec!["INF\t[from-env]\te"]);
}

#[test]
fn test_invalid_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "minimum_level = \"loud\"\n").unwrap();

    let output = svclog(&["--config", config_path.to_str().unwrap(), "emit", "info", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"));
}

#[test]
fn test_unknown_level_is_reported() {
    let output = svclog(&["emit", "loud", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown severity: loud"));
}

#[test]
fn test_pipe_wraps_input_in_lifecycle_lines() {
    let mut child = Command::new(BIN)
        .env_remove("SVCLOG_CONFIG")
        .env_remove("SVCLOG_MIN_LEVEL")
        .args([
            "--no-time",
            "--default-id",
            "X",
            "pipe",
            "--title",
            "worker",
            "--level",
            "warn",
            "--correlation-id",
            "req-1",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"first\n\nsecond\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "INF\t[X]\tworker service is starting...",
            "WRN\t[req-1]\tfirst",
            "WRN\t[req-1]\tsecond",
            "INF\t[X]\tworker service is stopping...",
        ]
    );
}
