//! Analysis store.
//!
//! Read-only dashboards: trending topics, aggregate content counts and the
//! daily engagement series. Each fetch replaces its slice wholesale.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};

use super::loading::{InFlight, Loadable};
use crate::error::{ErrorContext, ResultExt};
use crate::models::{ContentStats, HotTopic, UserBehavior};
use crate::traits::DataService;

/// Snapshot of the analysis store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisState {
    pub hot_topics: Vec<HotTopic>,
    /// `None` until the first successful fetch
    pub content_stats: Option<ContentStats>,
    pub user_behaviors: Vec<UserBehavior>,
    pub loading: bool,
}

impl AnalysisState {
    /// The hottest topic, if any are loaded.
    pub fn hottest_topic(&self) -> Option<&HotTopic> {
        self.hot_topics.iter().max_by_key(|topic| topic.heat)
    }

    /// Views summed over the loaded engagement series.
    pub fn total_views(&self) -> u64 {
        self.user_behaviors.iter().map(|day| day.views).sum()
    }
}

impl Loadable for AnalysisState {
    fn loading(&self) -> bool {
        self.loading
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// Store for the analysis page.
pub struct AnalysisStore {
    service: Arc<dyn DataService>,
    tx: watch::Sender<AnalysisState>,
    in_flight: InFlight,
}

impl AnalysisStore {
    pub fn new(service: Arc<dyn DataService>) -> Self {
        let (tx, _) = watch::channel(AnalysisState::default());
        Self {
            service,
            tx,
            in_flight: InFlight::new(),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> AnalysisState {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every republished state.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.tx.subscribe()
    }

    /// Operations currently running against this store.
    pub fn in_flight(&self) -> usize {
        self.in_flight.count()
    }

    /// Back to the empty initial state.
    pub fn reset(&self) {
        self.tx.send_replace(AnalysisState::default());
        self.in_flight.sync(&self.tx);
    }

    pub async fn fetch_hot_topics(&self) {
        let _loading = self.in_flight.begin(&self.tx);
        debug!("Fetching hot topics");

        match self
            .service
            .hot_topics()
            .await
            .context(ErrorContext::new("fetch_hot_topics").with_store("analysis"))
        {
            Ok(topics) => {
                let count = topics.len();
                self.tx.send_modify(|state| state.hot_topics = topics);
                info!(count, "Fetched hot topics");
            }
            Err(e) => error!(
                code = e.error_code(),
                category = %e.category(),
                retryable = e.is_retryable(),
                "Fetch hot topics error: {}",
                e
            ),
        }
    }

    pub async fn fetch_content_stats(&self) {
        let _loading = self.in_flight.begin(&self.tx);
        debug!("Fetching content stats");

        match self
            .service
            .content_stats()
            .await
            .context(ErrorContext::new("fetch_content_stats").with_store("analysis"))
        {
            Ok(stats) => {
                self.tx.send_modify(|state| state.content_stats = Some(stats));
                info!(total = stats.total, "Fetched content stats");
            }
            Err(e) => error!(
                code = e.error_code(),
                category = %e.category(),
                retryable = e.is_retryable(),
                "Fetch content stats error: {}",
                e
            ),
        }
    }

    pub async fn fetch_user_behaviors(&self) {
        let _loading = self.in_flight.begin(&self.tx);
        debug!("Fetching user behaviors");

        match self
            .service
            .user_behaviors()
            .await
            .context(ErrorContext::new("fetch_user_behaviors").with_store("analysis"))
        {
            Ok(series) => {
                let days = series.len();
                self.tx.send_modify(|state| state.user_behaviors = series);
                info!(days, "Fetched user behaviors");
            }
            Err(e) => error!(
                code = e.error_code(),
                category = %e.category(),
                retryable = e.is_retryable(),
                "Fetch user behaviors error: {}",
                e
            ),
        }
    }

    /// Fetch every slice concurrently.
    pub async fn refresh_all(&self) {
        tokio::join!(
            self.fetch_hot_topics(),
            self.fetch_content_stats(),
            self.fetch_user_behaviors(),
        );
    }
}
