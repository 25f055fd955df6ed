//! Data service error types.
//!
//! Errors raised at the boundary between a store and its [`DataService`].
//! The bundled mock never produces them unless told to, but every store is
//! written to survive them.
//!
//! [`DataService`]: crate::traits::DataService

use std::fmt;

/// Data service error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The service could not be reached.
    Unavailable { operation: String, message: String },
}

impl ServiceError {
    /// Name of the operation that failed.
    pub fn operation(&self) -> &str {
        match self {
            ServiceError::Unavailable { operation, .. } => operation,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Unavailable { .. } => "E_SVC_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Unavailable { operation, message } => {
                write!(f, "{} failed, service unavailable: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for ServiceError {}
