//! Common helpers for qcompass CLI tests.
//!
//! Every command runs with color disabled and a fixed locale so output is
//! stable across terminals.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Result of running the qcompass binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// `qcompass` with a deterministic environment.
///
/// `XDG_CONFIG_HOME` points at `config_home` so a developer's own config
/// file never leaks into the test.
pub fn qcompass(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qcompass"));
    cmd.env("NO_COLOR", "1")
        .env("TERM", "xterm")
        .env("LANG", "en_US.UTF-8")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("LC_ALL")
        .env_remove("LC_CTYPE")
        .env_remove("QCOMPASS_COLOR")
        .env_remove("QCOMPASS_FORMAT")
        .env_remove("QCOMPASS_UNICODE")
        .env_remove("QCOMPASS_LOG");
    cmd
}

pub fn run(config_home: &Path, args: &[&str]) -> TestResult {
    qcompass(config_home)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run qcompass")
        .into()
}

/// Run with `input` piped to stdin.
pub fn run_with_stdin(config_home: &Path, args: &[&str], input: &str) -> TestResult {
    let mut child = qcompass(config_home)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn qcompass");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child
        .wait_with_output()
        .expect("failed to wait for qcompass")
        .into()
}

/// Parse every stdout line as a JSON event.
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON line {:?}: {}", l, e)))
        .collect()
}
