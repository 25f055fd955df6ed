//! Configuration error type.

use thiserror::Error;

/// Error raised while reading [`AppConfig`](crate::config::AppConfig) from the
/// environment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("Invalid value for {var}: '{value}' is not a valid {expected}")]
    InvalidNumber {
        var: String,
        value: String,
        expected: &'static str,
    },

    /// A setting was present but outside its allowed range.
    #[error("Invalid value for {var}: {reason}")]
    OutOfRange { var: String, reason: String },
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidNumber { .. } => "E_CFG_NUMBER",
            ConfigError::OutOfRange { .. } => "E_CFG_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let err = ConfigError::InvalidNumber {
            var: "CONTENT_FACTORY_PAGE_SIZE".to_string(),
            value: "ten".to_string(),
            expected: "positive integer",
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTENT_FACTORY_PAGE_SIZE: 'ten' is not a valid positive integer"
        );
        assert_eq!(err.error_code(), "E_CFG_NUMBER");
    }
}
