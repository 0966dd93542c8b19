//! Severity classification and threshold gating
//!
//! The numeric encoding is fixed: `Debug=0, Warn=1, Error=2, Fatal=3, Info=4`.
//! The threshold is a direct numeric comparison against that encoding, so
//! Info passes any threshold up to 4. A `minimum_level` of 2 suppresses Warn
//! and Debug but still lets Info through.

use std::fmt;
use std::str::FromStr;

use svclog_core_types::schema::{TAG_DEBUG, TAG_ERROR, TAG_FATAL, TAG_INFO, TAG_WARN};
use svclog_core_types::CallContext;

use crate::config::EngineConfig;
use crate::errors::LogError;

/// Closed set of severities, in their fixed numeric encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug = 0,
    Warn = 1,
    Error = 2,
    Fatal = 3,
    Info = 4,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Info,
    ];

    /// Coerce a raw level; anything outside `0..=4` becomes Info
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Severity::Debug,
            1 => Severity::Warn,
            2 => Severity::Error,
            3 => Severity::Fatal,
            _ => Severity::Info,
        }
    }

    pub fn as_raw(self) -> i64 {
        self as i64
    }

    /// Fixed three-letter display tag
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Debug => TAG_DEBUG,
            Severity::Warn => TAG_WARN,
            Severity::Error => TAG_ERROR,
            Severity::Fatal => TAG_FATAL,
            Severity::Info => TAG_INFO,
        }
    }

    /// Error and Fatal are the only severities console mode prints
    pub fn is_failure(self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    /// Accepts names (`debug`, `warning`, ...), tags (`DBG`, ...) and raw
    /// integers. Integers go through `from_raw`, so `7` is Info.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<i64>() {
            return Ok(Severity::from_raw(raw));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "debug" | "dbg" => Ok(Severity::Debug),
            "warn" | "warning" | "wrn" => Ok(Severity::Warn),
            "error" | "err" => Ok(Severity::Error),
            "fatal" | "ftl" => Ok(Severity::Fatal),
            "info" | "inf" => Ok(Severity::Info),
            _ => Err(LogError::UnknownSeverity {
                value: s.to_string(),
            }),
        }
    }
}

/// Outcome of classifying one log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Display tag, or `None` when the call is below the threshold
    pub tag: Option<&'static str>,
    pub correlation_id: String,
    pub has_carrier: bool,
    /// Severity after coercion of the raw level
    pub severity: Severity,
}

impl Resolution {
    pub fn is_suppressed(&self) -> bool {
        self.tag.is_none()
    }
}

/// Classifies a call into a tag and correlation id against an engine config
#[derive(Debug, Clone, Copy)]
pub struct LevelResolver<'a> {
    config: &'a EngineConfig,
}

impl<'a> LevelResolver<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self, raw: i64, ctx: Option<&CallContext>) -> Resolution {
        let correlation_id = ctx
            .and_then(CallContext::correlation_id)
            .unwrap_or(self.config.correlation_default.as_str())
            .to_string();

        let severity = Severity::from_raw(raw);
        let tag = if severity.as_raw() < self.config.minimum_level {
            None
        } else {
            Some(severity.tag())
        };

        Resolution {
            tag,
            correlation_id,
            has_carrier: ctx.is_some(),
            severity,
        }
    }
}
