//! ShrinkX interactive video shrinker
//!
//! Pick a video, choose a target size, and get an MP4 re-encoded with a
//! two-pass H.264/AAC encode sized to fit.
//!
//! # Usage
//!
//! ```bash
//! shrinker
//! SHRINKX_LOG=debug shrinker
//! ```

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use shrinkx_cli::adapters::init_logging;
use shrinkx_cli::app::{DefaultAppContainer, RunOutcome};
use shrinkx_cli::cli::{Cli, Terminal};
use shrinkx_cli::config_initialization::AppConfig;
use shrinkx_cli::ShrinkError;

/// Main entry point for the ShrinkX CLI application
fn main() -> ExitCode {
    init_logging();
    let _cli = Cli::parse();

    info!("Starting ShrinkX video shrinker");

    match run() {
        Ok(()) => {
            info!("ShrinkX completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            let code = err
                .downcast_ref::<ShrinkError>()
                .map(ShrinkError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let container = DefaultAppContainer::new(config);

    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut term = Terminal::new(io::stdin().lock(), stdout).with_clear_screen(clear_screen);

    let outcome = container
        .shrink_interactor()
        .run(&mut term)
        .context("Shrink run failed")?;

    match outcome {
        RunOutcome::Cancelled => info!("Run cancelled by operator"),
        RunOutcome::Completed(report) => info!(output = %report.path.display(), "Output written"),
    }
    Ok(())
}
