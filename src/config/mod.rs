//! Runbook discovery, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use runbook::config::{load_config_file, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("runbook.yml");
//! fs::write(&path, "name: test\nsteps:\n  - name: hello\n    command: [echo, hi]\n").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.name, Some("test".to_string()));
//! ```
//!
//! # Runbook File Location
//!
//! The runbook is discovered by walking up from the starting directory,
//! looking for `runbook.yml` or `runbook.yaml`. The directory containing the
//! file becomes the base directory: every step runs with its working
//! directory fixed there, regardless of where the runner was invoked from.

pub mod loader;
pub mod schema;

pub use loader::{discover_config, find_runbook_file, load_config_file, parse_config};
pub use schema::{validate, RunbookConfig, Settings, StepConfig};
