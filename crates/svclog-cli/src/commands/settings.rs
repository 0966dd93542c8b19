//! Configuration resolution shared by every subcommand
//!
//! Precedence, lowest first: built-in defaults, `--config` TOML file,
//! `SVCLOG_*` environment variables, command-line flags. clap merges the
//! last two; this module layers them over the file.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use svclog_core::global;
use svclog_core::logging_facility::{init, Profile, TracingLogger};
use svclog_core::{CustomLogger, EngineConfig, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Built-in line engine writing to stdout
    Engine,
    /// tracing events through a fmt subscriber
    Tracing,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// TOML file with engine configuration
    #[arg(long, global = true, env = "SVCLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum severity: a name, tag or raw integer threshold
    #[arg(long, global = true, env = "SVCLOG_MIN_LEVEL", allow_hyphen_values = true)]
    pub min_level: Option<String>,

    /// Correlation id for calls without a bound carrier
    #[arg(long, global = true, env = "SVCLOG_DEFAULT_ID")]
    pub default_id: Option<String>,

    /// Print only error and fatal messages, undecorated
    #[arg(long, global = true, env = "SVCLOG_CONSOLE")]
    pub console: bool,

    /// Omit the timestamp prefix
    #[arg(long, global = true, env = "SVCLOG_NO_TIME")]
    pub no_time: bool,

    /// Log fatal messages without terminating
    #[arg(long, global = true, env = "SVCLOG_NO_EXIT")]
    pub no_exit: bool,

    /// Where log calls are delivered
    #[arg(long, global = true, env = "SVCLOG_BACKEND", value_enum, default_value_t = Backend::Engine)]
    pub backend: Backend,
}

impl SettingsArgs {
    /// Build the engine configuration from file, environment and flags
    pub fn resolve(&self) -> Result<EngineConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                let document = std::fs::read_to_string(path)
                    .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
                EngineConfig::from_toml_str(&document)?
            }
            None => EngineConfig::default(),
        };

        if let Some(level) = &self.min_level {
            config.minimum_level = parse_threshold(level)?;
        }
        if let Some(id) = &self.default_id {
            config.correlation_default = id.clone();
        }
        if self.console {
            config.console_mode = true;
        }
        if self.no_time {
            config.show_timestamp = false;
        }
        if self.no_exit {
            config.suppress_fatal_exit = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Integers are taken as-is so thresholds outside the severity range work
fn parse_threshold(value: &str) -> Result<i64, Box<dyn std::error::Error>> {
    match value.trim().parse::<i64>() {
        Ok(raw) => Ok(raw),
        Err(_) => Ok(value.parse::<Severity>()?.as_raw()),
    }
}

/// Install the resolved configuration and return the logger to call
///
/// The process-wide engine always receives the configuration, since
/// lifecycle lines go through it. The tracing backend is attached as the
/// delegate's alternate.
pub fn apply(args: &SettingsArgs) -> Result<CustomLogger, Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let mut logger = CustomLogger::new();

    if args.backend == Backend::Tracing {
        init(Profile::Development);
        let alternate = TracingLogger::new(config.correlation_default.clone())
            .with_exit_on_fatal(!config.suppress_fatal_exit);
        logger.set_logger(Arc::new(alternate));
    }

    global::configure(|logs| logs.set_config(config));
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        settings: SettingsArgs,
    }

    fn settings(argv: &[&str]) -> SettingsArgs {
        let mut full = vec!["svclog"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).settings
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = settings(&[
            "--min-level",
            "error",
            "--default-id",
            "X",
            "--console",
            "--no-time",
            "--no-exit",
        ])
        .resolve()
        .unwrap();

        assert_eq!(config.minimum_level, 2);
        assert_eq!(config.correlation_default, "X");
        assert!(config.console_mode);
        assert!(!config.show_timestamp);
        assert!(config.suppress_fatal_exit);
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = settings(&[]).resolve().unwrap();
        assert_eq!(config.minimum_level, 0);
        assert!(config.show_timestamp);
        assert!(!config.console_mode);
    }

    #[test]
    fn test_threshold_accepts_out_of_range_integers() {
        assert_eq!(parse_threshold("5").unwrap(), 5);
        assert_eq!(parse_threshold("-1").unwrap(), -1);
        assert_eq!(parse_threshold("WRN").unwrap(), 1);
    }

    #[test]
    fn test_unknown_threshold_name_is_rejected() {
        let err = parse_threshold("loud").unwrap_err();
        assert!(err.to_string().contains("Unknown severity"));
    }

    #[test]
    fn test_blank_default_id_fails_validation() {
        let err = settings(&["--default-id", " "]).resolve().unwrap_err();
        assert!(err.to_string().contains("correlation_default"));
    }
}
