//! Authentication-related error types.

use std::fmt;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// An operation needed a session and there was none.
    NotAuthenticated,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
        }
    }
}

impl std::error::Error for AuthError {}
