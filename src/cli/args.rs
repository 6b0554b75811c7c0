//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Every flag is optional:
//! running `envdoctor` with no arguments checks `.env` in the current
//! directory.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::DEFAULT_ENV_FILE;
use crate::ui::hints::DEFAULT_DEV_COMMAND;
use crate::ui::OutputMode;

/// envdoctor - Check local environment configuration and backend reachability.
#[derive(Debug, Parser)]
#[command(name = "envdoctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    #[command(flatten)]
    pub check: CheckArgs,

    /// Show check results only, without instructions
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode implied by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.check.json {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

/// Arguments controlling the check itself.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Settings file, relative to the project root
    #[arg(long, env = "ENVDOCTOR_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Template used when the settings file has to be created
    #[arg(long, env = "ENVDOCTOR_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Timeout for each reachability probe, in seconds
    #[arg(long, env = "ENVDOCTOR_TIMEOUT", default_value_t = 5)]
    pub timeout: u64,

    /// Dev server command shown in the instructions
    #[arg(long, default_value = DEFAULT_DEV_COMMAND)]
    pub dev_command: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Probe timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            template: None,
            timeout: 5,
            dev_command: DEFAULT_DEV_COMMAND.to_string(),
            json: false,
        }
    }
}
