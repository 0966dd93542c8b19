//! Engine configuration
//!
//! The engine only consumes already-resolved fields. Where they come from
//! (flags, environment, files) is the embedding program's concern; a TOML
//! helper is provided for programs that keep them in a file.

use serde::{Deserialize, Serialize};
use svclog_core_types::CorrelationId;

use crate::errors::{LogError, Result};
use crate::level::Severity;

/// Resolved configuration consumed by `Logging`
///
/// Fields are meant to be set once during startup. Missing keys in a TOML
/// document take their values from `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Identifier used when a call carries no context or an unbound one
    pub correlation_default: String,
    /// Raw severities below this value are suppressed
    pub minimum_level: i64,
    /// Print only Error/Fatal, undecorated
    pub console_mode: bool,
    /// Prefix each line with a 23-character timestamp
    pub show_timestamp: bool,
    /// Fatal calls log but do not terminate the process
    pub suppress_fatal_exit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            correlation_default: CorrelationId::new().to_string(),
            minimum_level: Severity::Debug.as_raw(),
            console_mode: false,
            show_timestamp: true,
            suppress_fatal_exit: false,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document and validate the result
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the document does not parse and
    /// `InvalidField` when a field fails validation.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the threshold from a severity
    pub fn with_minimum_severity(mut self, severity: Severity) -> Self {
        self.minimum_level = severity.as_raw();
        self
    }

    /// Check field domains
    ///
    /// The threshold itself is unrestricted: values outside `0..=4` are legal
    /// and behave as plain numeric cut-offs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` when the correlation default is blank or
    /// contains characters that would break the tab-separated line layout.
    pub fn validate(&self) -> Result<()> {
        if self.correlation_default.trim().is_empty() {
            return Err(LogError::InvalidField {
                field: "correlation_default".to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        if self
            .correlation_default
            .chars()
            .any(|c| c == '\t' || c == '\n' || c == '\r')
        {
            return Err(LogError::InvalidField {
                field: "correlation_default".to_string(),
                reason: "must not contain tabs or line breaks".to_string(),
            });
        }
        Ok(())
    }
}
