//! Result type alias for content factory operations.

use super::context::ErrorContext;
use super::factory_error::FactoryError;

/// Type alias for Results using FactoryError.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> FactoryResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> FactoryResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<FactoryError>,
{
    fn context(self, ctx: ErrorContext) -> FactoryResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> FactoryResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
