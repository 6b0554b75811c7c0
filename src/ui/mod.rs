//! Terminal output for check results.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for colored terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`hints`] with the instruction and troubleshooting text
//!
//! # Example
//!
//! ```
//! use envdoctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Configuration check");
//! ui.success(".env file found");
//! assert!(ui.has_success(".env"));
//! ```

pub mod hints;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DoctorTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show the banner at the top of the report.
    fn show_header(&mut self, title: &str);

    /// Show a section heading such as "Checking connection to Supabase...".
    fn show_section(&mut self, title: &str);

    /// Show a numbered instruction for the developer.
    fn show_instruction(&mut self, number: usize, text: &str);

    /// Show a command the developer should run.
    fn show_command(&mut self, command: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);
}
