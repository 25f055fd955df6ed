//! Error handling for the content factory.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain errors**: [`ServiceError`], [`ConfigError`], plus [`AuthError`]
//!   for screens that need a signed-in user
//! - **Unified Error Type**: [`FactoryError`] consolidates service and config
//!   failures
//! - **Error Context**: which store operation failed
//! - **Result Type Alias**: [`FactoryResult<T>`]
//!
//! Stores catch failures from their service calls, log them and release
//! their loading count. Only `AuthStore::login` hands an error back to the
//! caller.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Service | Service unreachable | Yes |
//! | Configuration | Bad environment settings | No |

mod auth;
mod category;
mod config;
mod context;
mod factory_error;
mod result;
mod service;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use factory_error::FactoryError;
pub use result::{FactoryResult, ResultExt};
pub use service::ServiceError;
