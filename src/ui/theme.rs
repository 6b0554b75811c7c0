//! Visual theme and styling.

use console::{Style, Term};

/// Severity colors for the check report.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages and instructions (yellow).
    pub warning: Style,
    /// Style for error messages (red).
    pub error: Style,
    /// Style for section headings (bold).
    pub highlight: Style,
    /// Style for the banner (green bold).
    pub header: Style,
    /// Style for commands the user should run (green).
    pub command: Style,
    /// Style for hints (yellow dim).
    pub hint: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            highlight: Style::new().bold(),
            header: Style::new().green().bold(),
            command: Style::new().green(),
            hint: Style::new().yellow().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            command: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format the report banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("=== {} ===", title)))
    }

    /// Format a numbered instruction.
    pub fn format_instruction(&self, number: usize, text: &str) -> String {
        format!("{}", self.warning.apply_to(format!("{}. {}", number, text)))
    }

    /// Format a command line, indented under its instruction.
    pub fn format_command(&self, command: &str) -> String {
        format!("   {}", self.command.apply_to(command))
    }
}

/// Check if colors should be enabled for output written to `term`.
pub fn should_use_colors(term: &Term) -> bool {
    // NO_COLOR env var (https://no-color.org/)
    colors_enabled(std::env::var_os("NO_COLOR").is_some(), term.is_term())
}

fn colors_enabled(no_color: bool, is_term: bool) -> bool {
    !no_color && is_term
}
