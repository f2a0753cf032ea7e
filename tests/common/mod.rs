//! Common test utilities for recurl integration tests
//!
//! Provides helpers to run the binary with arguments and optional stdin, and
//! a small result type over stdout/stderr/exit code.

use std::process::Stdio;

use assert_cmd::cargo::cargo_bin;

/// Result of running the recurl CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, self.stdout))
    }
}

/// Run `recurl` with the given arguments.
pub fn recurl(args: &[&str]) -> CliResponse {
    recurl_with_stdin(args, None)
}

/// Run `recurl` with the given arguments, piping `stdin` when provided.
pub fn recurl_with_stdin(args: &[&str], stdin: Option<&str>) -> CliResponse {
    let mut command = std::process::Command::new(cargo_bin("recurl"));
    command.args(args);

    let output = match stdin {
        Some(input) => {
            use std::io::Write;
            command.stdin(Stdio::piped());
            command.stdout(Stdio::piped());
            command.stderr(Stdio::piped());
            let mut child = command.spawn().expect("failed to spawn recurl");
            child
                .stdin
                .as_mut()
                .expect("stdin not piped")
                .write_all(input.as_bytes())
                .expect("failed to write stdin");
            child.wait_with_output().expect("failed to wait for recurl")
        }
        None => command.output().expect("failed to run recurl"),
    };

    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}
