//! Configuration schema definitions for runbook files.
//!
//! This module contains the struct definitions that map to the YAML
//! runbook format, plus structural validation.

use crate::error::{Result, RunbookError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration structure for runbook.yml
///
/// Steps are a YAML sequence, not a map: the order in the file is the
/// execution order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunbookConfig {
    /// Runbook name (shown in the start banner)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Global settings
    pub settings: Settings,

    /// Ordered step definitions
    pub steps: Vec<StepConfig>,

    /// Base directory for all steps: the runbook file's parent directory.
    /// Populated once at load time, never read from the ambient working
    /// directory at execution time.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl RunbookConfig {
    /// Look up a step by name.
    pub fn step(&self, name: &str) -> Option<&StepConfig> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// Display name for banners.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("runbook")
    }
}

/// Global settings that apply to the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause for operator acknowledgment after a failed step
    /// (interactive runs only).
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub pause_on_error: bool,

    /// Environment variables applied to every step.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pause_on_error: true,
            env: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn is_true(v: &bool) -> bool {
    *v
}

/// Configuration for a single step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    /// Step name (unique within the runbook).
    pub name: String,

    /// Step title (for display; falls back to the name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Program and arguments, executed directly without a shell.
    pub command: Vec<String>,

    /// Step-specific environment variables (override global `settings.env`).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

/// Validate a parsed runbook.
///
/// Checks that every step has a non-empty name, names are unique, and every
/// command names a program. An empty step list is valid (a trivially
/// successful run).
pub fn validate(config: &RunbookConfig) -> Result<()> {
    let mut seen = std::collections::HashSet::new();

    for step in &config.steps {
        if step.name.trim().is_empty() {
            return Err(RunbookError::ConfigValidationError {
                message: "a step is missing a name".to_string(),
            });
        }

        if !seen.insert(step.name.as_str()) {
            return Err(RunbookError::ConfigValidationError {
                message: format!("duplicate step name '{}'", step.name),
            });
        }

        if step.command.is_empty() {
            return Err(RunbookError::ConfigValidationError {
                message: format!("step '{}' has an empty command", step.name),
            });
        }

        if step.command[0].trim().is_empty() {
            return Err(RunbookError::ConfigValidationError {
                message: format!("step '{}' names no program to run", step.name),
            });
        }
    }

    Ok(())
}
