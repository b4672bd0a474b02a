//! Child process spawning and exit-code capture.
//!
//! Commands are argv vectors (program + arguments) spawned directly, without
//! shell interposition. The exit code is the whole contract with the child:
//! the runner never inspects its output to decide control flow.

use crate::error::Result;
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// The exit code to propagate: the child's own code, or 1 when the
    /// child was killed by a signal.
    pub fn effective_code(&self) -> i32 {
        self.exit_code.unwrap_or(1)
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged over the inherited environment).
    pub env: HashMap<String, String>,

    /// Capture stdout/stderr (if false, the child inherits the terminal).
    pub capture: bool,
}

/// Execute an argv command and wait for it to finish.
///
/// Blocks until the child terminates; no timeout is applied, so a hung
/// child hangs the caller. A spawn failure (program missing, not
/// executable) surfaces as an `Io` error for the caller to classify.
pub fn execute(argv: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let (program, args) = argv.split_first().expect("validated non-empty command");

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    tracing::debug!("Spawning {:?} in {:?}", argv, options.cwd);

    if !options.capture {
        // Inherit the terminal so the child streams straight to the operator.
        let status = cmd.status()?;
        let duration = start.elapsed();

        return Ok(CommandResult {
            exit_code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: status.success(),
        });
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.stdin(Stdio::null());

    let mut child = cmd.spawn()?;

    // Drain both pipes on their own threads so a chatty child can't
    // deadlock against a full pipe buffer.
    let stdout = child.stdout.take().expect("piped stdout");
    let stderr = child.stderr.take().expect("piped stderr");

    let stdout_handle = thread::spawn(move || collect_lines(stdout));
    let stderr_handle = thread::spawn(move || collect_lines(stderr));

    let status = child.wait()?;

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    let duration = start.elapsed();

    Ok(CommandResult {
        exit_code: status.code(),
        stdout: stdout_output,
        stderr: stderr_output,
        duration,
        success: status.success(),
    })
}

fn collect_lines<R: std::io::Read>(reader: R) -> String {
    let reader = BufReader::new(reader);
    let mut output = String::new();
    for line in reader.lines().map_while(std::result::Result::ok) {
        output.push_str(&line);
        output.push('\n');
    }
    output
}
