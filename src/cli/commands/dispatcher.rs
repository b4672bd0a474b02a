//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{discover_config, load_config_file, RunbookConfig};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, output: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    start_dir: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    ///
    /// `start_dir` is where runbook discovery begins; `config_path`
    /// short-circuits discovery when the operator passed `--config`.
    pub fn new(start_dir: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            start_dir,
            config_path,
        }
    }

    /// The directory runbook discovery starts from.
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Load the runbook for this invocation.
    pub fn load_config(&self) -> Result<RunbookConfig> {
        match &self.config_path {
            Some(path) => load_config_file(path),
            None => discover_config(&self.start_dir),
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, output: &Output) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(self, args.clone());
                cmd.execute(output)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self, args.clone());
                cmd.execute(output)
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(&self.start_dir, args.clone());
                cmd.execute(output)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(output)
            }
            None => {
                // Default to run with default args
                let cmd = super::run::RunCommand::new(self, crate::cli::args::RunArgs::default());
                cmd.execute(output)
            }
        }
    }
}
