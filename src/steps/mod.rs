//! Step resolution and run outcomes.
//!
//! A [`Step`] is one external command invocation treated as an atomic unit
//! of the run, with a pass/fail outcome decided solely by its exit code.
//! Steps are resolved from config at startup, executed at most once per run,
//! and discarded afterwards.

use crate::config::StepConfig;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// A step ready for execution.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// Step name (unique within the runbook).
    pub name: String,

    /// Display title (falls back to the name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Program and arguments.
    pub command: Vec<String>,

    /// Step-specific environment variables.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

impl Step {
    /// Resolve a step from its configuration.
    pub fn from_config(config: &StepConfig) -> Self {
        Self {
            name: config.name.clone(),
            title: config.title.clone(),
            command: config.command.clone(),
            env: config.env.clone(),
        }
    }

    /// The label shown in progress lines.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// The command rendered for display.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Status of a step in the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step is waiting to run.
    Pending,

    /// Step is currently executing.
    Running,

    /// Step completed successfully.
    Completed,

    /// Step failed (non-zero exit code, or it never started).
    Failed,

    /// Step was not executed (dry run, filtered out, or after a failure).
    Skipped,
}

impl StepStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StepStatus::Completed | StepStatus::Failed | StepStatus::Skipped
        )
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// Result of executing (or skipping) a single step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Step name.
    pub name: String,

    /// Terminal status.
    pub status: StepStatus,

    /// Exit code (None when the step never produced one).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,
}

impl StepOutcome {
    /// Create a success outcome.
    pub fn completed(name: &str, exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Completed,
            exit_code,
            duration,
        }
    }

    /// Create a failure outcome.
    pub fn failed(name: &str, exit_code: i32, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Failed,
            exit_code: Some(exit_code),
            duration,
        }
    }

    /// Create a skipped outcome (dry run).
    pub fn skipped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Skipped,
            exit_code: None,
            duration: Duration::ZERO,
        }
    }

    /// Whether the step counts as successful.
    pub fn success(&self) -> bool {
        self.status != StepStatus::Failed
    }
}

/// Format a duration for progress lines.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, millis / 100)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
