//! Output mode and mode-aware terminal writer.

use super::theme::RunbookTheme;
use std::io::Write;
use std::str::FromStr;

/// Width of the `=` rule bounding banners.
pub const BANNER_WIDTH: usize = 60;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including child command output.
    Verbose,
    /// Show progress and status only; children inherit the terminal.
    #[default]
    Normal,
    /// Capture child output behind spinners; show it only on failure.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal | Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode captures child output instead of inheriting the
    /// terminal.
    pub fn captures_child_output(&self) -> bool {
        matches!(self, Self::Quiet | Self::Silent)
    }
}

/// Terminal writer that respects the output mode.
///
/// Status goes to stdout; errors go to stderr regardless of mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: RunbookTheme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: RunbookTheme::new(),
        }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Check if spinners should be shown.
    pub fn shows_spinners(&self) -> bool {
        self.mode.shows_spinners()
    }

    /// Write a plain status line.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a success line.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    /// Write a warning line.
    pub fn warning(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    /// Write an error line to stderr. Always shown, in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Write an `=`-bounded banner with the given content lines.
    pub fn banner(&self, lines: &[String]) {
        if !self.mode.shows_status() {
            return;
        }

        let rule = "=".repeat(BANNER_WIDTH);
        println!("{}", self.theme.border.apply_to(&rule));
        for line in lines {
            println!("  {}", self.theme.highlight.apply_to(line));
        }
        println!("{}", self.theme.border.apply_to(&rule));
    }

    /// Write a numbered step progress line.
    pub fn step_line(&self, index: usize, total: usize, label: &str, command: &str) {
        if !self.mode.shows_status() {
            return;
        }

        println!(
            "{} {}  {}",
            self.theme
                .step_number
                .apply_to(format!("[Step {}/{}]", index, total)),
            self.theme.highlight.apply_to(label),
            self.theme.command.apply_to(command),
        );
    }

    /// Write captured child output (shown on failure, and in verbose mode).
    pub fn command_output(&self, output: &str) {
        print!("{}", output);
        let _ = std::io::stdout().flush();
    }
}
