//! `arm-sort` command implementations.
//!
//! Commands write to caller-supplied writers so they can be driven from
//! tests without spawning the binary.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use arm_classifier::{ClassificationReport, Measurements, Package};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

/// Exit status used when any input failed validation.
pub const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "arm-sort", version, about = "Sort packages into handling categories")]
pub struct Cli {
    /// Log filter directive, overriding RUST_LOG (e.g. `debug`, `arm_classifier=trace`)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a single package
    Classify(ClassifyArgs),
    /// Classify newline-delimited JSON packages read from stdin
    Batch,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Width in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub width: i64,

    /// Height in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub height: i64,

    /// Length in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub length: i64,

    /// Mass in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub mass: i64,

    /// Print the full report as JSON instead of the bare label
    #[arg(long)]
    pub json: bool,
}

/// How a command finished when it did not hit an I/O failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunStatus {
    Success,
    InvalidInput,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::InvalidInput => EXIT_INVALID_INPUT,
        }
    }
}

/// One line of `batch` output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchLine {
    Classified {
        line: usize,
        #[serde(flatten)]
        report: ClassificationReport,
    },
    Failed {
        line: usize,
        error: String,
    },
}

pub fn run_classify(
    args: &ClassifyArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RunStatus> {
    let package = match Package::new(args.width, args.height, args.length, args.mass) {
        Ok(package) => package,
        Err(e) => {
            writeln!(err, "error: {e}").context("writing error")?;
            return Ok(RunStatus::InvalidInput);
        }
    };

    let report = package.report();
    if args.json {
        serde_json::to_writer(&mut *out, &report).context("writing JSON report")?;
        writeln!(out).context("writing output")?;
    } else {
        writeln!(out, "{}", report.category).context("writing output")?;
    }
    Ok(RunStatus::Success)
}

/// Classify every non-blank line of `input`, one JSON result per line.
///
/// Lines are numbered from 1. A malformed, non-UTF-8 or invalid line is
/// reported in place and does not stop the batch; only read and write
/// failures are fatal.
pub fn run_batch(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<RunStatus> {
    let mut status = RunStatus::Success;
    let mut classified = 0usize;
    let mut failed = 0usize;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("reading input line {}", line_no + 1))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        if buf.trim_ascii().is_empty() {
            continue;
        }

        let result = classify_line(line_no, &buf);
        match &result {
            BatchLine::Classified { .. } => classified += 1,
            BatchLine::Failed { error, .. } => {
                tracing::warn!(line = line_no, %error, "skipping package");
                failed += 1;
                status = RunStatus::InvalidInput;
            }
        }

        serde_json::to_writer(&mut *out, &result).context("writing batch result")?;
        writeln!(out).context("writing output")?;
    }

    tracing::info!(classified, failed, "batch complete");
    Ok(status)
}

fn classify_line(line: usize, raw: &[u8]) -> BatchLine {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => {
            return BatchLine::Failed {
                line,
                error: format!("invalid UTF-8: {e}"),
            };
        }
    };

    match serde_json::from_str::<Measurements>(text) {
        Ok(measurements) => match Package::try_from(measurements) {
            Ok(package) => BatchLine::Classified {
                line,
                report: package.report(),
            },
            Err(e) => BatchLine::Failed {
                line,
                error: e.to_string(),
            },
        },
        Err(e) => BatchLine::Failed {
            line,
            error: format!("invalid package JSON: {e}"),
        },
    }
}
