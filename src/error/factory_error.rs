//! Unified error type for the content factory.
//!
//! `FactoryError` gathers the service and configuration errors behind one
//! enum so callers can categorize and log them uniformly.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::service::ServiceError;

/// Unified error type for the content factory.
#[derive(Debug)]
pub enum FactoryError {
    /// Data service failures.
    Service(ServiceError),

    /// Configuration errors.
    Config(ConfigError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<FactoryError>,
        context: ErrorContext,
    },
}

impl FactoryError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FactoryError::Service(_) => ErrorCategory::Service,
            FactoryError::Config(_) => ErrorCategory::Configuration,
            FactoryError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FactoryError::Service(err) => err.error_code(),
            FactoryError::Config(err) => err.error_code(),
            FactoryError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        FactoryError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::Service(err) => write!(f, "{}", err),
            FactoryError::Config(err) => write!(f, "{}", err),
            FactoryError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for FactoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FactoryError::Service(err) => Some(err),
            FactoryError::Config(err) => Some(err),
            FactoryError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<ServiceError> for FactoryError {
    fn from(err: ServiceError) -> Self {
        FactoryError::Service(err)
    }
}

impl From<ConfigError> for FactoryError {
    fn from(err: ConfigError) -> Self {
        FactoryError::Config(err)
    }
}
