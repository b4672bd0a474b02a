//! Runbook file discovery and loading.
//!
//! This module finds the runbook file by walking up from a starting
//! directory, parses it, and pins the base directory that every step will
//! run in.

use crate::config::schema::{validate, RunbookConfig};
use crate::error::{Result, RunbookError};
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized runbook file names, in lookup order.
pub const RUNBOOK_FILE_NAMES: [&str; 2] = ["runbook.yml", "runbook.yaml"];

/// Find the runbook file by walking up from `start`.
///
/// Returns the first `runbook.yml`/`runbook.yaml` found in `start` or any
/// ancestor directory, or `None` when the root is reached without a match.
pub fn find_runbook_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        for name in RUNBOOK_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Discover and load the runbook for a starting directory.
///
/// # Errors
///
/// Returns `ConfigNotFound` when no runbook file exists at or above `start`.
pub fn discover_config(start: &Path) -> Result<RunbookConfig> {
    let path = find_runbook_file(start).ok_or_else(|| RunbookError::ConfigNotFound {
        path: start.join(RUNBOOK_FILE_NAMES[0]),
    })?;

    load_config_file(&path)
}

/// Load a runbook file, validate it, and fix its base directory.
///
/// The base directory is the runbook file's parent, resolved to an absolute
/// path once here. Step execution never consults the ambient working
/// directory.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` for structural problems.
pub fn load_config_file(path: &Path) -> Result<RunbookConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RunbookError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RunbookError::Io(e)
        }
    })?;

    let mut config = parse_config(&content, path)?;
    validate(&config)?;

    let parent = path.parent().unwrap_or(Path::new("."));
    config.base_dir = fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf());

    tracing::debug!(
        "Loaded runbook {} ({} steps, base dir {})",
        path.display(),
        config.steps.len(),
        config.base_dir.display()
    );

    Ok(config)
}

/// Parse YAML content into a RunbookConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<RunbookConfig> {
    serde_yaml::from_str(content).map_err(|e| RunbookError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
