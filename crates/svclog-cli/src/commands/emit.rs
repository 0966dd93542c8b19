//! Emit command
//!
//! Usage: svclog emit <LEVEL> [--format] [--correlation-id <ID>] <ARGS>...

use std::fmt::Display;

use clap::Args;
use svclog_core::{CustomLogger, Severity};

use super::{carrier, dispatch};

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity name, tag or raw integer (out-of-range values log as info)
    #[arg(allow_hyphen_values = true)]
    pub level: String,

    /// Treat the first argument as a printf-style template
    #[arg(long)]
    pub format: bool,

    /// Bind this id to the call's carrier
    #[arg(long)]
    pub correlation_id: Option<String>,

    /// Message parts, concatenated without separators
    #[arg(required = true, num_args = 1..)]
    pub args: Vec<String>,
}

/// Execute emit
///
/// A fatal level terminates the process from inside the engine unless
/// exit is suppressed.
pub fn execute(args: EmitArgs, logger: &CustomLogger) -> Result<(), Box<dyn std::error::Error>> {
    let severity: Severity = args.level.parse()?;
    let ctx = carrier(args.correlation_id.as_deref());

    let (template, operands) = if args.format {
        match args.args.split_first() {
            Some((first, rest)) => (Some(first.as_str()), rest),
            None => (None, &args.args[..]),
        }
    } else {
        (None, &args.args[..])
    };

    let parts: Vec<&dyn Display> = operands.iter().map(|a| a as &dyn Display).collect();
    dispatch(logger, severity, ctx.as_ref(), template, &parts);
    Ok(())
}
