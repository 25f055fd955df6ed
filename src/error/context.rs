//! Error context for enriched error information.
//!
//! Context records which store operation failed, so a logged failure can be
//! traced back to the call that produced it.

use std::fmt;

/// Context information attached to errors for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Name of the operation that failed, e.g. `fetch_contents`.
    pub operation: String,

    /// Store the operation belongs to (`content`, `auth`, `analysis`).
    pub store: Option<String>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            store: None,
        }
    }

    /// Set the owning store for this context.
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.store {
            Some(ref store) => write!(f, "[{}::{}]", store, self.operation),
            None => write!(f, "[{}]", self.operation),
        }
    }
}
