//! svclog core - leveled logging façade with correlation ids
//!
//! This crate provides the logging engine and its pluggable surface:
//! - Severity classification with a single numeric threshold
//! - Correlation id resolution from an optional per-call `CallContext`
//! - Tab-separated line layout with an optional fixed-width timestamp
//! - Console mode for interactive programs (bare Error/Fatal messages only)
//! - A fatal-exit policy that tests can switch off
//! - A delegate wrapper for plugging in an alternate `Logger`
//! - A process-wide default engine and variadic call-site macros
//!
//! ```
//! use svclog_core::{EngineConfig, Logger, Logging};
//! use svclog_core_types::CallContext;
//!
//! let (logs, lines) = Logging::buffered(EngineConfig {
//!     correlation_default: "X".to_string(),
//!     show_timestamp: false,
//!     ..EngineConfig::default()
//! });
//!
//! logs.debug(None, &[&"Hello", &"World"]);
//! let ctx = CallContext::background().with_correlation_id("Y");
//! logs.infof(Some(&ctx), "Hello %s", &[&"Universe"]);
//!
//! assert_eq!(lines.lines(), vec!["DBG\t[X]\tHelloWorld", "INF\t[Y]\tHello Universe"]);
//! ```

pub mod config;
pub mod delegate;
pub mod engine;
pub mod errors;
pub mod global;
pub mod level;
pub mod logger;
pub mod logging_facility;
pub mod macros;
pub mod message;
pub mod output;
pub mod time_format;

// Re-export commonly used types
pub use config::EngineConfig;
pub use delegate::CustomLogger;
pub use engine::{Logging, FATAL_EXIT_CODE};
pub use errors::{LogError, Result};
pub use global::DefaultLogger;
pub use level::{LevelResolver, Resolution, Severity};
pub use logger::{Args, Logger};
pub use message::Message;
pub use output::{LineBuffer, OutputFormatter, Sink};
