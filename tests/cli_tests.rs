//! End-to-end tests for the `pathvalidate` binary.
//!
//! Each test spawns the compiled binary and checks stdout and the exit code.
//!
//! ```bash
//! cargo test --test cli_tests
//! ```

use std::io::Write;
use std::process::{Command, Output, Stdio};

const CORRUPTED: &str = r#"fi:l*e/p"a?t>h|.t<xt"#;

fn pathvalidate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pathvalidate"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run pathvalidate binary")
}

fn pathvalidate_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pathvalidate"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn pathvalidate binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for pathvalidate")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ===== HELP TESTS =====

#[test]
fn test_help_exits_zero() {
    for args in [
        vec!["-h"],
        vec!["sanitize", "-h"],
        vec!["validate", "-h"],
        vec!["error", "-h"],
    ] {
        let output = pathvalidate(&args);
        assert_eq!(output.status.code(), Some(0), "args: {args:?}");
        assert!(stdout(&output).contains("Usage"), "args: {args:?}");
    }
}

#[test]
fn test_version() {
    let output = pathvalidate(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("pathvalidate "));
}

// ===== SANITIZE TESTS =====

#[test]
fn test_sanitize_path() {
    let output = pathvalidate(&["sanitize", CORRUPTED]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "file/path.txt\n");
}

#[test]
fn test_sanitize_filename() {
    let output = pathvalidate(&["--filename", "sanitize", CORRUPTED]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "filepath.txt\n");
}

#[test]
fn test_sanitize_global_flags_after_subcommand() {
    let output = pathvalidate(&["sanitize", "--filename", CORRUPTED]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "filepath.txt\n");
}

#[test]
fn test_sanitize_multiple_inputs() {
    let output = pathvalidate(&["--platform", "windows", "--filename", "sanitize", "con", "a?b", "ok.txt"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "con_\nab\nok.txt\n");
}

#[test]
fn test_sanitize_replacement_text() {
    let output = pathvalidate(&["--filename", "sanitize", "--replacement-text", "_", "a:b"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "a_b\n");
}

#[test]
fn test_sanitize_invalid_replacement_is_usage_error() {
    let output = pathvalidate(&["--filename", "sanitize", "--replacement-text", "/", "a:b"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_sanitize_normalize() {
    let output = pathvalidate(&["--platform", "linux", "sanitize", "--normalize", "a//b/./c/../d"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "a/b/d\n");
}

#[test]
fn test_sanitize_validate_after_failure_continues() {
    let output = pathvalidate(&["--filename", "sanitize", "--validate-after-sanitize", "???", "a.txt"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "a.txt\n");
    let err = stderr(&output);
    assert_eq!(err.matches("PV2000").count(), 1, "logged once: {err}");
    assert!(!err.contains("WARN"));
}

#[test]
fn test_sanitize_quiet_suppresses_logs() {
    let output = pathvalidate(&["-q", "--filename", "sanitize", "--validate-after-sanitize", "???"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_sanitize_max_len() {
    let output = pathvalidate(&["--filename", "--max-len", "4", "sanitize", "abcdef"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "abcd\n");

    let output = pathvalidate(&["--filename", "--max-bytes", "-1", "sanitize", "abcdef"]);
    assert_eq!(stdout(&output), "abcdef\n");
}

#[test]
fn test_sanitize_zero_max_len_is_usage_error() {
    let output = pathvalidate(&["--max-len", "0", "sanitize", "a"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unsatisfiable"));
}

#[test]
fn test_sanitize_from_stdin() {
    let output = pathvalidate_with_stdin(&["--filename", "sanitize", "-"], b"a:b\nc*d\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "ab\ncd\n");
}

#[test]
fn test_sanitize_from_stdin_skips_undecodable_lines() {
    let output = pathvalidate_with_stdin(&["sanitize", "-"], b"ok.txt\n\xff\nfi:le\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "ok.txt\nfile\n");
    assert!(stderr(&output).contains("UTF-8"));
}

// ===== VALIDATE TESTS =====

#[test]
fn test_validate_path() {
    assert_eq!(pathvalidate(&["validate", "file/path.txt"]).status.code(), Some(0));
    assert_eq!(pathvalidate(&["validate", "file/path.txt", "abc.txt"]).status.code(), Some(0));

    let output = pathvalidate(&["validate", CORRUPTED]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("[PV1100]"));
}

#[test]
fn test_validate_filename() {
    assert_eq!(pathvalidate(&["--filename", "validate", "filepath.txt"]).status.code(), Some(0));
    assert_eq!(pathvalidate(&["--filename", "validate", CORRUPTED]).status.code(), Some(1));
}

#[test]
fn test_validate_reserved_names() {
    let output = pathvalidate(&["--platform", "Windows", "--filename", "validate", "Con.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("PV1002"));

    let output = pathvalidate(&[
        "--platform",
        "windows",
        "--filename",
        "validate",
        "--no-check-reserved",
        "Con.txt",
    ]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_validate_min_len() {
    let output = pathvalidate(&["validate", "--min-len", "5", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("PV1103"));
}

#[test]
fn test_validate_jsonl() {
    let output = pathvalidate(&["--platform", "windows", "validate", "--format", "jsonl", "ok", "a<b", "c|d"]);
    assert_eq!(output.status.code(), Some(1));

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["value"], "a<b");
    assert_eq!(lines[0]["platform"], "Windows");
    assert_eq!(lines[0]["violations"][0]["reason"], "PV1100");
    assert_eq!(lines[1]["value"], "c|d");
}

#[test]
fn test_validate_verbose_logs_valid_inputs() {
    let output = pathvalidate(&["-v", "validate", "abc.txt"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("abc.txt is a valid path for universal"));
}

#[test]
fn test_validate_from_stdin() {
    let output = pathvalidate_with_stdin(&["--filename", "validate", "-"], b"good.txt\nbad/name\n");
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("PV1105"));
}

#[test]
fn test_validate_from_stdin_skips_undecodable_lines() {
    let output = pathvalidate_with_stdin(&["validate", "-"], b"ok.txt\n\xff\nfi:le\n");
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("PV1100"));
    assert!(stderr(&output).contains("UTF-8"));

    let output = pathvalidate_with_stdin(&["validate", "-"], b"ok.txt\n\xfe\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unknown_platform_is_usage_error() {
    let output = pathvalidate(&["--platform", "amiga", "validate", "a"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("amiga"));
}

// ===== CONFIG FILE TESTS =====

#[test]
fn test_config_file_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[rules]\nplatform = \"windows\"\nfilename = true").unwrap();
    let config = file.path().to_str().unwrap();

    let output = pathvalidate(&["--config", config, "sanitize", "aux.txt"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "aux_.txt\n");

    // Flags override file values.
    let output = pathvalidate(&["--config", config, "--platform", "linux", "sanitize", "aux.txt"]);
    assert_eq!(stdout(&output), "aux.txt\n");
}

#[test]
fn test_invalid_config_file_is_usage_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[rules]\nmax_len = -7").unwrap();
    let config = file.path().to_str().unwrap();

    let output = pathvalidate(&["--config", config, "validate", "a"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("rules.max_len"));
}

// ===== ERROR SUBCOMMAND TESTS =====

#[test]
fn test_error_single_code() {
    let output = pathvalidate(&["error", "PV1001"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("# Error Reason\n"));
    assert!(out.contains("| PV1001 | NULL_NAME |"));
}

#[test]
fn test_error_multiple_codes() {
    let output = pathvalidate(&["error", "PV1001", "PV1002"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("NULL_NAME"));
    assert!(out.contains("RESERVED_NAME"));
}

#[test]
fn test_error_list() {
    let output = pathvalidate(&["error", "--list"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    for code in ["PV1001", "PV1100", "PV1105", "PV1201", "PV2000"] {
        assert!(out.contains(code), "missing {code}");
    }
}

#[test]
fn test_error_unknown_code() {
    let output = pathvalidate(&["error", "INVALID"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error code INVALID is not found."));
}

#[test]
fn test_error_without_arguments_prints_help() {
    let output = pathvalidate(&["error"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
}
