//! Application context.
//!
//! [`AppStores`] builds the three stores over one shared data service at
//! startup and is handed to consumers by reference.

use std::sync::Arc;

use crate::adapters::MockDataService;
use crate::config::AppConfig;
use crate::error::FactoryResult;
use crate::state::{AnalysisStore, AuthStore, ContentStore};
use crate::traits::DataService;

/// Every store the application uses, sharing one data service.
pub struct AppStores {
    pub config: AppConfig,
    pub service: Arc<dyn DataService>,
    pub content: ContentStore,
    pub auth: AuthStore,
    pub analysis: AnalysisStore,
}

impl AppStores {
    /// Build the stores over `service`.
    pub fn new(config: AppConfig, service: Arc<dyn DataService>) -> Self {
        tracing::debug!(
            app = %config.app_name,
            page_size = config.default_page_size,
            "Building stores"
        );
        Self {
            content: ContentStore::with_page_size(Arc::clone(&service), config.default_page_size),
            auth: AuthStore::new(Arc::clone(&service)),
            analysis: AnalysisStore::new(Arc::clone(&service)),
            service,
            config,
        }
    }

    /// Build the stores over a [`MockDataService`] using the configured latency.
    pub fn with_mock(config: AppConfig) -> Self {
        let service = MockDataService::new().with_latency(config.mock_latency);
        Self::new(config, Arc::new(service))
    }

    /// Read [`AppConfig`] from the environment and build the stores over a
    /// [`MockDataService`].
    pub fn mock_from_env() -> FactoryResult<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::with_mock(config))
    }

    /// Return every store to its initial state.
    pub fn reset(&self) {
        self.content.reset();
        self.auth.reset();
        self.analysis.reset();
    }
}
