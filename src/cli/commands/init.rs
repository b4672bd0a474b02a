//! Init command implementation.
//!
//! The `runbook init` command writes a starter runbook.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::ui::{confirm_overwrite, Output};

use super::dispatcher::{Command, CommandResult};

/// Starter runbook: the classic update-then-deploy publish sequence.
const STARTER_RUNBOOK: &str = r#"# Runbook: ordered steps, run top to bottom.
# A step's command is a program plus arguments, executed in this
# file's directory. The first non-zero exit code aborts the run.

name: Site publish

settings:
  pause_on_error: true

steps:
  - name: update
    title: Update database
    command: [python, main.py]

  - name: deploy
    title: Deploy to production
    command: [npx, vercel, --prod]
"#;

/// The init command implementation.
pub struct InitCommand {
    target_dir: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(target_dir: &Path, args: InitArgs) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            args,
        }
    }

    fn runbook_path(&self) -> PathBuf {
        self.target_dir.join("runbook.yml")
    }
}

impl Command for InitCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let path = self.runbook_path();

        if path.exists() && !self.args.force {
            if console::user_attended_stderr() {
                if !confirm_overwrite("runbook.yml")? {
                    output.warning("Keeping the existing runbook.yml");
                    return Ok(CommandResult::failure(1));
                }
            } else {
                output.error("runbook.yml already exists (use --force to overwrite)");
                return Ok(CommandResult::failure(1));
            }
        }

        fs::write(&path, STARTER_RUNBOOK)?;

        output.success(&format!("Wrote {}", path.display()));
        output.message("Edit the steps, then run 'runbook' to execute them.");

        Ok(CommandResult::success())
    }
}
