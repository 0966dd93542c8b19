//! Tracing subscriber initialization
//!
//! Installs the global subscriber that receives events from `TracingLogger`.
//! Programs using only the line engine never need this.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use super::tracing_logger::TARGET;

/// Subscriber profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug and above
    Development,
    /// JSON output, info and above
    Production,
    /// Bare registry; tests install a capture layer via `init_test_capture`
    Test,
}

impl Profile {
    fn default_directive(self) -> String {
        match self {
            Profile::Development => format!("{TARGET}=debug"),
            Profile::Production | Profile::Test => format!("{TARGET}=info"),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the tracing subscriber once per process
///
/// `RUST_LOG` overrides the profile's default filter. Later calls are no-ops,
/// as is a call made after another subscriber was installed.
///
/// # Example
///
/// ```
/// use svclog_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        match profile {
            Profile::Development => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .finish()
                    .try_init();
            }
            Profile::Production => {
                let _ = tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .finish()
                    .try_init();
            }
            Profile::Test => {
                let _ = tracing_subscriber::registry().try_init();
            }
        }
    });
}
