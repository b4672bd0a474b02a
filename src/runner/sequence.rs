//! The sequential fail-fast run loop.
//!
//! Steps execute strictly in order; step N+1 starts only after step N has
//! produced a terminal exit code. The first non-zero code halts the run and
//! becomes the overall result. There are no retries, no rollback, and no
//! partial-success notion.

use crate::config::RunbookConfig;
use crate::error::{Result, RunbookError};
use crate::shell::{execute, CommandOptions};
use crate::steps::{format_duration, Step, StepOutcome};
use crate::ui::{Output, ProgressSpinner};
use chrono::{DateTime, Local};

/// Exit code reported when a step's program cannot be launched at all.
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// Options controlling a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Run only these steps (relative order preserved).
    pub only: Vec<String>,

    /// Skip these steps.
    pub skip: Vec<String>,

    /// Print what would run without spawning anything.
    pub dry_run: bool,

    /// Capture child output behind a spinner instead of inheriting the
    /// terminal; captured stderr is shown only on failure.
    pub capture_output: bool,
}

/// Result of a whole run: a local accumulator, not process-global state.
#[derive(Debug)]
pub struct RunOutcome {
    /// Overall exit code: 0 on full success, otherwise the first failing
    /// step's code.
    pub exit_code: i32,

    /// When the run started.
    pub started_at: DateTime<Local>,

    /// Per-step outcomes, in execution order. Steps after the first failure
    /// never appear here; they were never attempted.
    pub outcomes: Vec<StepOutcome>,
}

impl RunOutcome {
    /// Whether every attempted step succeeded.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes a runbook's steps strictly in order.
pub struct SequenceRunner<'a> {
    config: &'a RunbookConfig,
}

impl<'a> SequenceRunner<'a> {
    /// Create a runner for a loaded runbook.
    pub fn new(config: &'a RunbookConfig) -> Self {
        Self { config }
    }

    /// Resolve the steps this run will attempt, applying `--only`/`--skip`
    /// filters. Relative order always follows the runbook file; filters can
    /// drop steps but never reorder or resurrect them.
    pub fn select_steps(&self, options: &RunOptions) -> Result<Vec<Step>> {
        for name in options.only.iter().chain(options.skip.iter()) {
            if self.config.step(name).is_none() {
                return Err(RunbookError::UnknownStep { name: name.clone() });
            }
        }

        let steps = self
            .config
            .steps
            .iter()
            .filter(|s| options.only.is_empty() || options.only.contains(&s.name))
            .filter(|s| !options.skip.contains(&s.name))
            .map(Step::from_config)
            .collect();

        Ok(steps)
    }

    /// Run the selected steps and return the accumulated outcome.
    ///
    /// Prints the start banner, one `[Step i/N]` line per step, an `[ERROR]`
    /// line for the first failure, and a completion banner when everything
    /// succeeded. An empty step list trivially succeeds with banners only.
    pub fn run(&self, options: &RunOptions, output: &Output) -> Result<RunOutcome> {
        let started_at = Local::now();
        let steps = self.select_steps(options)?;
        let total = steps.len();

        output.banner(&[
            self.config.display_name().to_string(),
            started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);

        if options.dry_run {
            output.message("Dry run: no commands will be executed");
        }

        let mut outcomes = Vec::with_capacity(total);
        let mut exit_code = 0;

        for (index, step) in steps.iter().enumerate() {
            output.step_line(index + 1, total, step.label(), &step.command_line());

            if options.dry_run {
                output.message(&format!("  would run: {}", step.command_line()));
                outcomes.push(StepOutcome::skipped(&step.name));
                continue;
            }

            tracing::debug!("Starting step '{}' ({}/{})", step.name, index + 1, total);

            let cmd_options = CommandOptions {
                cwd: Some(self.config.base_dir.clone()),
                env: self.merged_env(step),
                capture: options.capture_output,
            };

            let spinner = if options.capture_output && output.shows_spinners() {
                ProgressSpinner::new(&format!("Running {}...", step.label()))
            } else {
                ProgressSpinner::hidden()
            };

            match execute(&step.command, &cmd_options) {
                Err(e) => {
                    spinner.finish_and_clear();
                    tracing::debug!("Step '{}' failed to spawn: {}", step.name, e);
                    let err = RunbookError::SpawnFailed {
                        step: step.name.clone(),
                        program: step.command[0].clone(),
                    };
                    output.error(&format!("[ERROR] {}", err));
                    outcomes.push(StepOutcome::failed(
                        &step.name,
                        SPAWN_FAILURE_CODE,
                        std::time::Duration::ZERO,
                    ));
                    exit_code = SPAWN_FAILURE_CODE;
                    break;
                }
                Ok(result) if result.success => {
                    spinner.finish_and_clear();
                    output.success(&format!(
                        "{} ({})",
                        step.label(),
                        format_duration(result.duration)
                    ));
                    outcomes.push(StepOutcome::completed(
                        &step.name,
                        result.exit_code,
                        result.duration,
                    ));
                }
                Ok(result) => {
                    spinner.finish_and_clear();
                    let code = result.effective_code();
                    if options.capture_output && !result.stderr.is_empty() {
                        output.command_output(&result.stderr);
                    }
                    let err = RunbookError::StepFailed {
                        step: step.name.clone(),
                        code,
                    };
                    output.error(&format!("[ERROR] {}", err));
                    outcomes.push(StepOutcome::failed(&step.name, code, result.duration));
                    exit_code = code;
                    break;
                }
            }
        }

        if exit_code == 0 {
            output.banner(&["All steps completed successfully".to_string()]);
        }

        Ok(RunOutcome {
            exit_code,
            started_at,
            outcomes,
        })
    }

    fn merged_env(&self, step: &Step) -> std::collections::HashMap<String, String> {
        let mut env = self.config.settings.env.clone();
        env.extend(step.env.iter().map(|(k, v)| (k.clone(), v.clone())));
        env
    }
}
