//! List command implementation.
//!
//! The `runbook list` command prints the configured steps in execution
//! order.

use crate::cli::args::ListArgs;
use crate::error::{Result, RunbookError};
use crate::steps::Step;
use crate::ui::{Output, RunbookTheme};

use super::dispatcher::{Command, CommandDispatcher, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    dispatcher: &'a CommandDispatcher,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(dispatcher: &'a CommandDispatcher, args: ListArgs) -> Self {
        Self { dispatcher, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let config = match self.dispatcher.load_config() {
            Ok(c) => c,
            Err(RunbookError::ConfigNotFound { .. }) => {
                output.error("No runbook found. Run 'runbook init' first.");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let steps: Vec<Step> = config.steps.iter().map(Step::from_config).collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&steps)
                .map_err(|e| anyhow::anyhow!("failed to serialize steps: {}", e))?;
            output.message(&json);
            return Ok(CommandResult::success());
        }

        let theme = RunbookTheme::new();
        let total = steps.len();

        output.message(&format!(
            "{} ({} steps)",
            theme.highlight.apply_to(config.display_name()),
            total
        ));

        for (index, step) in steps.iter().enumerate() {
            output.message(&format!(
                "  {} {}  {}",
                theme
                    .step_number
                    .apply_to(format!("[Step {}/{}]", index + 1, total)),
                theme.highlight.apply_to(step.label()),
                theme.command.apply_to(step.command_line()),
            ));
        }

        Ok(CommandResult::success())
    }
}
