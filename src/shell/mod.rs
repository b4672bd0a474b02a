//! Child process execution.

pub mod command;

pub use command::{execute, CommandOptions, CommandResult};

/// Check if running in a CI environment.
///
/// Used to suppress interactive behavior (the pause-on-error prompt) when no
/// operator is watching.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}
