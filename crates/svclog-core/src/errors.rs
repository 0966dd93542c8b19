use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

/// Errors raised while resolving configuration for the engine
///
/// The log entry points themselves never fail; suppression is normal
/// operation. These errors only surface from parsing severities and
/// configuration before the engine is set up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogError {
    /// Severity name is neither a known name, tag nor integer
    #[error("Unknown severity: {value}")]
    UnknownSeverity { value: String },

    /// Configuration document could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Configuration parsed but a field is out of its allowed domain
    #[error("Invalid configuration field {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl LogError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            LogError::UnknownSeverity { .. } => "ERR_UNKNOWN_SEVERITY",
            LogError::InvalidConfig { .. } => "ERR_INVALID_CONFIG",
            LogError::InvalidField { .. } => "ERR_INVALID_FIELD",
        }
    }
}

impl From<toml::de::Error> for LogError {
    fn from(err: toml::de::Error) -> Self {
        LogError::InvalidConfig {
            reason: err.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let cases = vec![
            (
                LogError::UnknownSeverity {
                    value: "loud".to_string(),
                },
                "ERR_UNKNOWN_SEVERITY",
            ),
            (
                LogError::InvalidConfig {
                    reason: "bad".to_string(),
                },
                "ERR_INVALID_CONFIG",
            ),
            (
                LogError::InvalidField {
                    field: "correlation_default".to_string(),
                    reason: "empty".to_string(),
                },
                "ERR_INVALID_FIELD",
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_display_includes_value() {
        let err = LogError::UnknownSeverity {
            value: "loud".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown severity: loud");
    }
}
