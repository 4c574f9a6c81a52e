//! `arm-sort` entry point.
//!
//! Logs go to stderr; stdout carries only classification output.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use arm_sort_cli::{Cli, Command, RunStatus, run_batch, run_classify};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor RUST_LOG is set.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid --log-level {directive:?}"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
    Ok(())
}

fn run(cli: &Cli) -> Result<RunStatus> {
    init_tracing(cli.log_level.as_deref())?;
    tracing::debug!("arm-sort v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Classify(args) => run_classify(args, &mut out, &mut std::io::stderr().lock()),
        Command::Batch => run_batch(&mut std::io::stdin().lock(), &mut out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
