//! Error types for runbook operations.
//!
//! This module defines [`RunbookError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RunbookError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RunbookError::Other`) for unexpected errors
//! - Step failure is fatal to a run and is never caught, retried, or
//!   downgraded; it maps directly to the process exit code

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for runbook operations.
#[derive(Debug, Error)]
pub enum RunbookError {
    /// No runbook file found at or above the starting directory.
    #[error("No runbook found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the runbook file.
    #[error("Failed to parse runbook at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid runbook structure or values.
    #[error("Invalid runbook: {message}")]
    ConfigValidationError { message: String },

    /// A `--only`/`--skip` filter named a step that does not exist.
    #[error("Unknown step: {name}")]
    UnknownStep { name: String },

    /// A step's child process exited with a non-zero code.
    #[error("Step '{step}' failed with exit code {code}")]
    StepFailed { step: String, code: i32 },

    /// A step's program could not be launched at all.
    #[error("Step '{step}' could not be started: {program} not runnable")]
    SpawnFailed { step: String, program: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for runbook operations.
pub type Result<T> = std::result::Result<T, RunbookError>;
