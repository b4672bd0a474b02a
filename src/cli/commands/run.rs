//! Run command implementation.
//!
//! The `runbook run` command executes the runbook's steps in order.

use crate::cli::args::RunArgs;
use crate::error::{Result, RunbookError};
use crate::runner::{RunOptions, SequenceRunner};
use crate::shell::is_ci;
use crate::ui::{pause_for_ack, Output};

use super::dispatcher::{Command, CommandDispatcher, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    dispatcher: &'a CommandDispatcher,
    args: RunArgs,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(dispatcher: &'a CommandDispatcher, args: RunArgs) -> Self {
        Self { dispatcher, args }
    }

    /// Build run options from args and output mode.
    fn build_options(&self, output: &Output) -> RunOptions {
        RunOptions {
            only: self.args.only.clone(),
            skip: self.args.skip.clone(),
            dry_run: self.args.dry_run,
            capture_output: output.mode().captures_child_output(),
        }
    }

    /// Whether a failed run should pause for operator acknowledgment.
    fn should_pause(&self, pause_on_error: bool) -> bool {
        pause_on_error && !self.args.non_interactive && !is_ci() && console::user_attended_stderr()
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let config = match self.dispatcher.load_config() {
            Ok(c) => c,
            Err(RunbookError::ConfigNotFound { .. }) => {
                output.error("No runbook found. Run 'runbook init' first.");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let runner = SequenceRunner::new(&config);
        let options = self.build_options(output);

        let outcome = match runner.run(&options, output) {
            Ok(o) => o,
            Err(e @ RunbookError::UnknownStep { .. }) => {
                output.error(&format!("{}", e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if outcome.success() {
            return Ok(CommandResult::success());
        }

        if self.should_pause(config.settings.pause_on_error) {
            pause_for_ack();
        }

        Ok(CommandResult::failure(outcome.exit_code))
    }
}
