//! Correlation types for tagging log lines with a per-operation identifier
//!
//! A `CallContext` is created per logical operation by the caller and passed
//! into each log call. It may carry a bound correlation id and it carries a
//! cancellation token, which the logging engine never consults.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::schema::CTX_KEY_CORRELATION_ID;

/// Opaque identifier correlating the log lines of one operation or process
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a new random CorrelationId using UUIDv4
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CorrelationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Cancellation-aware call context that may carry a correlation id
///
/// Values are immutable once bound; `with_value` returns a new context sharing
/// the parent's cancellation token. `child` derives a context whose token is
/// cancelled together with the parent's.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    values: Arc<HashMap<String, String>>,
    cancel: CancellationToken,
}

impl CallContext {
    /// An empty context with no bound values and a fresh cancellation token
    pub fn background() -> Self {
        Self::default()
    }

    /// Bind a value under `key`, returning the derived context
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = (*self.values).clone();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(values),
            cancel: self.cancel.clone(),
        }
    }

    /// Bind a correlation id under the well-known key
    pub fn with_correlation_id(&self, id: impl Into<String>) -> Self {
        self.with_value(CTX_KEY_CORRELATION_ID, id)
    }

    /// Look up a bound value
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The correlation id bound under the well-known key, if any
    pub fn correlation_id(&self) -> Option<&str> {
        self.value(CTX_KEY_CORRELATION_ID)
    }

    /// Derive a context with the same values whose token is a child of this one
    pub fn child(&self) -> Self {
        Self {
            values: self.values.clone(),
            cancel: self.cancel.child_token(),
        }
    }

    /// Cancel this context and every context derived from it via `child`
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// The underlying token, for callers that await cancellation
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }
}
