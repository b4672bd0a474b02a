//! Visual theme and styling.

use console::Style;

/// Runbook's visual theme.
#[derive(Debug, Clone)]
pub struct RunbookTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for step counters like `[Step 1/2]` (cyan).
    pub step_number: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for banner rules (bold).
    pub border: Style,
}

impl Default for RunbookTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RunbookTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            step_number: Style::new().cyan(),
            command: Style::new().dim().italic(),
            border: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            step_number: Style::new(),
            command: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (text in red bold, no icon: error lines carry
    /// their own `[ERROR]` prefix).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = RunbookTheme::plain();
        let msg = theme.format_success("Complete");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Complete"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = RunbookTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error_without_icon() {
        let theme = RunbookTheme::plain();
        let msg = theme.format_error("[ERROR] step 'update' failed");
        assert!(msg.starts_with("[ERROR]"));
    }

    #[test]
    fn plain_theme_creates_without_panic() {
        let theme = RunbookTheme::plain();
        let _ = theme.format_success("test");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = RunbookTheme::default();
        let new = RunbookTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }

    #[test]
    fn style_slots_exist() {
        let theme = RunbookTheme::new();
        let _ = theme.step_number.apply_to("[Step 1/2]");
        let _ = theme.command.apply_to("npx vercel --prod");
        let _ = theme.border.apply_to("====");
        let _ = theme.dim.apply_to("2.5s");
        let _ = theme.highlight.apply_to("Site publish");
    }
}
