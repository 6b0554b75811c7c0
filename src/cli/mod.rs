//! Command-line interface for envdoctor.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check command that runs every step in order

pub mod args;
pub mod check;

pub use args::{CheckArgs, Cli};
pub use check::CheckCommand;
