//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show check results, instructions, and hints.
    #[default]
    Normal,
    /// Show check results only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows instructions and hints.
    pub fn shows_guidance(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
