//! envdoctor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use envdoctor::cli::{CheckCommand, Cli};
use envdoctor::ui::TerminalUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never interleave with the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("envdoctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envdoctor=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("envdoctor starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = if cli.check.json {
        TerminalUI::stderr(cli.output_mode())
    } else {
        TerminalUI::new(cli.output_mode())
    };

    let command = CheckCommand::new(&project_root, cli.check);
    command.execute(&mut ui);

    // Check results are informational; the run itself always succeeds.
    ExitCode::SUCCESS
}
