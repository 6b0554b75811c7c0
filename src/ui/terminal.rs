//! Colored terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DoctorTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI writing to stdout.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_term(Term::stdout(), mode)
    }

    /// Create a terminal UI writing to stderr.
    ///
    /// Used with `--json` so stdout carries nothing but the report.
    pub fn stderr(mode: OutputMode) -> Self {
        Self::with_term(Term::stderr(), mode)
    }

    fn with_term(term: Term, mode: OutputMode) -> Self {
        let theme = if should_use_colors(&term) {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self { term, theme, mode }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}", self.theme.highlight.apply_to(title)).ok();
        }
    }

    fn show_instruction(&mut self, number: usize, text: &str) {
        if self.mode.shows_guidance() {
            writeln!(self.term, "{}", self.theme.format_instruction(number, text)).ok();
        }
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_guidance() {
            writeln!(self.term, "{}", self.theme.format_command(command)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_guidance() {
            writeln!(self.term, "{}", self.theme.hint.apply_to(hint)).ok();
        }
    }
}
