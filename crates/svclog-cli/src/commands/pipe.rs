//! Pipe command
//!
//! Usage: svclog pipe --title <TITLE> [--level <LEVEL>] < input

use std::fmt::Display;
use std::io::BufRead;

use clap::Args;
use svclog_core::{global, CustomLogger, Severity};

use super::{carrier, dispatch};

#[derive(Debug, Args)]
pub struct PipeArgs {
    /// Service title for the starting and stopping lines
    #[arg(long)]
    pub title: String,

    /// Severity for every piped line
    #[arg(long, default_value = "info", allow_hyphen_values = true)]
    pub level: String,

    /// Bind this id to every piped line
    #[arg(long)]
    pub correlation_id: Option<String>,
}

/// Execute pipe
///
/// Empty input lines are skipped.
pub fn execute(args: PipeArgs, logger: &CustomLogger) -> Result<(), Box<dyn std::error::Error>> {
    let severity: Severity = args.level.parse()?;
    let ctx = carrier(args.correlation_id.as_deref());

    global::starting(args.title);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let parts: [&dyn Display; 1] = [&line];
        dispatch(logger, severity, ctx.as_ref(), None, &parts);
    }

    global::stopping();
    Ok(())
}
