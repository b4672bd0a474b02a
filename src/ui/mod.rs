//! Banners, styled output, spinners, and prompts.
//!
//! This module provides:
//! - [`Output`] - mode-aware terminal writer with the banner format
//! - [`RunbookTheme`] - console styling
//! - [`ProgressSpinner`] - spinner for captured-output steps
//! - [`pause_for_ack`] / [`confirm_overwrite`] - interactive prompts
//!
//! # Example
//!
//! ```
//! use runbook::ui::{Output, OutputMode};
//!
//! let output = Output::new(OutputMode::Quiet);
//! output.success("Run complete");
//! ```

pub mod output;
pub mod prompts;
pub mod spinner;
pub mod theme;

pub use output::{Output, OutputMode, BANNER_WIDTH};
pub use prompts::{confirm_overwrite, pause_for_ack};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, RunbookTheme};
