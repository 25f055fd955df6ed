//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```ignore
//! use content_factory::prelude::*;
//! ```
//!
//! This will import:
//! - The application context and configuration (AppStores, AppConfig)
//! - The stores and their snapshots
//! - Model types (ContentItem, ContentDraft, ContentPatch, User, ...)
//! - Error types (FactoryError, FactoryResult, ResultExt)
//! - The data service seam and its mock

// Application context
pub use crate::app::AppStores;
pub use crate::config::AppConfig;

// Stores
pub use crate::state::{
    AnalysisState, AnalysisStore, AuthPhase, AuthState, AuthStore, ContentState, ContentStore,
};

// Model types
pub use crate::models::{
    AuditDecision, ContentDraft, ContentItem, ContentKind, ContentPatch, ContentStats,
    ContentStatus, HotTopic, Trend, User, UserBehavior,
};

// Errors
pub use crate::error::{ErrorCategory, FactoryError, FactoryResult, ResultExt};

// Data service
pub use crate::adapters::MockDataService;
pub use crate::traits::DataService;
