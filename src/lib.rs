//! Runbook - sequential, fail-fast execution of external command sequences.
//!
//! Runbook replaces ad-hoc wrapper scripts (batch files or shell one-liners
//! that `cd` to their own directory, invoke a tool, and bail on the first
//! non-zero exit code) with a declarative YAML runbook and a polished CLI.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runbook discovery, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Sequential step orchestration
//! - [`shell`] - Child process execution
//! - [`steps`] - Step resolution and run outcomes
//! - [`ui`] - Banners, styled output, spinners, and prompts
//!
//! # Example
//!
//! ```
//! use runbook::config::parse_config;
//! use std::path::Path;
//!
//! let yaml = "steps:\n  - name: update\n    command: [python, main.py]\n";
//! let config = parse_config(yaml, Path::new("runbook.yml")).unwrap();
//! assert_eq!(config.steps[0].name, "update");
//! ```
//!
//! For end-to-end behavior, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, RunbookError};
