//! Error types for Browser Survey
//!
//! The classifier itself never fails; these errors cover the surrounding
//! configuration loading, tier parsing, and replay I/O.

use thiserror::Error;

/// Unified error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Unknown experience tier: {label:?}")]
    InvalidTier { label: String },

    #[error("Invalid trigger sample on line {line}: {reason}")]
    InvalidSample { line: usize, reason: String },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error was caused by bad user input or configuration
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_)
                | Error::InvalidTier { .. }
                | Error::InvalidSample { .. }
                | Error::JsonParse(_)
                | Error::YamlParse(_)
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        if self.is_input_error() {
            2
        } else {
            1
        }
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = Error::Configuration("bad config".into());
        assert_eq!(err.exit_code(), 2);

        let err = Error::InvalidSample {
            line: 3,
            reason: "missing trigger".into(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
        assert!(!err.is_input_error());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidTier {
            label: "watch".into(),
        };
        assert_eq!(err.to_string(), "Unknown experience tier: \"watch\"");

        let err = Error::InvalidSample {
            line: 7,
            reason: "expected value".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid trigger sample on line 7: expected value"
        );
    }
}
