//! Client-side stores.
//!
//! Each store owns one slice of state behind a `tokio::sync::watch` channel:
//! - [`ContentStore`]: the loaded content page and its local edits
//! - [`AuthStore`]: the signed-in user
//! - [`AnalysisStore`]: read-only dashboards
//!
//! Stores never call each other. Consumers read with `snapshot()`, observe
//! with `subscribe()` and drive the async operations directly.

pub mod analysis;
pub mod auth;
pub mod content;
mod loading;

pub use analysis::{AnalysisState, AnalysisStore};
pub use auth::{AuthPhase, AuthState, AuthStore};
pub use content::{ContentState, ContentStore, DEFAULT_PAGE_SIZE};
pub use loading::{InFlight, Loadable, LoadingGuard};
