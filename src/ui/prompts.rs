//! Interactive prompts.

use crate::error::Result;
use console::Term;

/// Block until the operator acknowledges a failure.
///
/// Lets the operator read the error before the window closes when the run
/// was launched from a double-clicked shortcut or a wrapping terminal that
/// exits with the process. Callers only invoke this in interactive runs.
pub fn pause_for_ack() {
    let term = Term::stderr();
    let _ = term.write_str("Press Enter to continue...");
    let _ = term.read_line();
}

/// Ask whether an existing file should be overwritten.
pub fn confirm_overwrite(what: &str) -> Result<bool> {
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", what))
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;

    Ok(confirmed)
}
