//! Content store.
//!
//! Owns the visible page of content items with its pagination cursor, and the
//! create/update/delete/search/audit operations on it. Only `fetch_contents`
//! reaches the data service; every other mutation is local-first and is never
//! confirmed by a backend.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::loading::{InFlight, Loadable};
use crate::error::{ErrorContext, ResultExt};
use crate::models::{
    AuditDecision, AuditRecord, ContentDraft, ContentItem, ContentPatch, ContentStatus,
};
use crate::traits::DataService;

/// Page size used before the first fetch.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Snapshot of the content store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentState {
    /// The currently loaded page (or search result)
    pub contents: Vec<ContentItem>,
    /// Size of the full dataset, adjusted by local creates and deletes
    pub total: usize,
    /// 1-based page index of the last fetch
    pub page: usize,
    pub page_size: usize,
    pub loading: bool,
}

impl ContentState {
    pub fn new(page_size: usize) -> Self {
        Self {
            contents: Vec::new(),
            total: 0,
            page: 1,
            page_size: page_size.max(1),
            loading: false,
        }
    }

    /// Find a loaded item by id.
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.contents.iter().find(|item| item.id == id)
    }

    /// Loaded items with the given status, or all of them for `None`.
    pub fn filter_by_status(&self, status: Option<ContentStatus>) -> Vec<&ContentItem> {
        self.contents
            .iter()
            .filter(|item| status.map_or(true, |s| item.status == s))
            .collect()
    }

    /// Number of loaded items in each status. Every status has an entry.
    pub fn status_counts(&self) -> HashMap<ContentStatus, usize> {
        let mut counts: HashMap<ContentStatus, usize> =
            ContentStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for item in &self.contents {
            *counts.entry(item.status).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Loadable for ContentState {
    fn loading(&self) -> bool {
        self.loading
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// Hands out time-derived ids that never repeat within one store.
///
/// An id is the current Unix time in milliseconds, bumped past the last id
/// handed out when two calls land in the same millisecond.
#[derive(Debug, Default)]
struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    fn next(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = millis.max(last + 1);
            match self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return candidate.to_string(),
                Err(actual) => last = actual,
            }
        }
    }
}

/// Store for the content list.
pub struct ContentStore {
    service: Arc<dyn DataService>,
    tx: watch::Sender<ContentState>,
    in_flight: InFlight,
    ids: IdGenerator,
    default_page_size: usize,
}

impl ContentStore {
    pub fn new(service: Arc<dyn DataService>) -> Self {
        Self::with_page_size(service, DEFAULT_PAGE_SIZE)
    }

    /// Create a store whose initial (and reset) page size is `page_size`.
    pub fn with_page_size(service: Arc<dyn DataService>, page_size: usize) -> Self {
        let (tx, _) = watch::channel(ContentState::new(page_size));
        Self {
            service,
            tx,
            in_flight: InFlight::new(),
            ids: IdGenerator::default(),
            default_page_size: page_size.max(1),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> ContentState {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every republished state.
    pub fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.tx.subscribe()
    }

    /// Number of operations currently running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.count()
    }

    /// Return to the initial empty state.
    pub fn reset(&self) {
        self.tx.send_replace(ContentState::new(self.default_page_size));
        self.in_flight.sync(&self.tx);
    }

    /// Load page `page` (1-based) of `page_size` items from the full dataset.
    ///
    /// A zero page or page size is ignored. On a service failure the state is
    /// left as it was.
    pub async fn fetch_contents(&self, page: usize, page_size: usize) {
        if page == 0 || page_size == 0 {
            warn!(page, page_size, "Ignoring fetch_contents with zero page or page size");
            return;
        }

        let _loading = self.in_flight.begin(&self.tx);
        debug!(page, page_size, "Fetching contents");

        let dataset = match self
            .service
            .list_contents()
            .await
            .context(ErrorContext::new("fetch_contents").with_store("content"))
        {
            Ok(dataset) => dataset,
            Err(e) => {
                error!(
                    code = e.error_code(),
                    category = %e.category(),
                    retryable = e.is_retryable(),
                    "Fetch contents error: {}",
                    e
                );
                return;
            }
        };

        let total = dataset.len();
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);
        let contents = dataset[start..end].to_vec();
        let count = contents.len();

        self.tx.send_modify(|state| {
            state.contents = contents;
            state.total = total;
            state.page = page;
            state.page_size = page_size;
        });
        info!(page, page_size, count, total, "Fetched contents");
    }

    /// Fetch the current page again.
    pub async fn reload(&self) {
        let (page, page_size) = {
            let state = self.tx.borrow();
            (state.page, state.page_size)
        };
        self.fetch_contents(page, page_size).await;
    }

    /// Create a draft locally and put it at the front of the list.
    pub async fn create_content(&self, draft: ContentDraft) {
        let _loading = self.in_flight.begin(&self.tx);

        let now = Utc::now();
        let item = ContentItem::from_draft(self.ids.next(now), draft, now);
        let id = item.id.clone();

        self.tx.send_modify(|state| {
            state.contents.insert(0, item);
            state.total += 1;
        });
        info!(id = %id, "Created content");
    }

    /// Merge `patch` into the item with `id`. Unknown ids are ignored.
    pub async fn update_content(&self, id: &str, patch: ContentPatch) {
        let _loading = self.in_flight.begin(&self.tx);

        let updated = self.tx.send_if_modified(|state| {
            match state.contents.iter_mut().find(|item| item.id == id) {
                Some(item) => {
                    item.apply(patch, Utc::now());
                    true
                }
                None => false,
            }
        });

        if updated {
            info!(id, "Updated content");
        } else {
            warn!(id, "Update skipped, content not found");
        }
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub async fn delete_content(&self, id: &str) {
        let _loading = self.in_flight.begin(&self.tx);

        let deleted = self.tx.send_if_modified(|state| {
            let before = state.contents.len();
            state.contents.retain(|item| item.id != id);
            if state.contents.len() < before {
                state.total = state.total.saturating_sub(1);
                true
            } else {
                false
            }
        });

        if deleted {
            info!(id, "Deleted content");
        } else {
            warn!(id, "Delete skipped, content not found");
        }
    }

    /// Keep only loaded items whose title or body contains `keyword`,
    /// ignoring case.
    ///
    /// Only the currently loaded page is searched, and `total` becomes the
    /// number of matches.
    pub async fn search_contents(&self, keyword: &str) {
        let _loading = self.in_flight.begin(&self.tx);

        let needle = keyword.to_lowercase();
        let mut matches = 0;
        self.tx.send_modify(|state| {
            state.contents.retain(|item| item.matches_lowercase(&needle));
            state.total = state.contents.len();
            matches = state.total;
        });
        info!(keyword, matches, "Searched contents");
    }

    /// Record a review decision on the item with `id` and move it to the
    /// matching status. Unknown ids are ignored.
    pub async fn audit_content(
        &self,
        id: &str,
        decision: AuditDecision,
        reviewer: &str,
        comment: Option<String>,
    ) {
        let _loading = self.in_flight.begin(&self.tx);

        let audited = self.tx.send_if_modified(|state| {
            let Some(item) = state.contents.iter_mut().find(|item| item.id == id) else {
                return false;
            };
            let now = Utc::now();
            item.audit_history.push(AuditRecord {
                at: now,
                reviewer: reviewer.to_string(),
                decision,
                comment,
            });
            item.status = decision.resulting_status();
            item.touch(now);
            true
        });

        if audited {
            info!(id, ?decision, reviewer, "Audited content");
        } else {
            warn!(id, "Audit skipped, content not found");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockDataService;
    use std::time::Duration;

    fn store() -> (ContentStore, MockDataService) {
        let service = MockDataService::new().with_latency(Duration::ZERO);
        (ContentStore::new(Arc::new(service.clone())), service)
    }

    #[test]
    fn test_initial_state() {
        let (store, _) = store();
        let state = store.snapshot();
        assert!(state.contents.is_empty());
        assert_eq!(state.total, 0);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert!(!state.loading);
    }

    #[test]
    fn test_id_generator_is_strictly_increasing() {
        let ids = IdGenerator::default();
        let now = Utc::now();

        let a: i64 = ids.next(now).parse().unwrap();
        let b: i64 = ids.next(now).parse().unwrap();
        let c: i64 = ids.next(now).parse().unwrap();

        assert_eq!(a, now.timestamp_millis());
        assert_eq!(b, a + 1);
        assert_eq!(c, a + 2);
    }

    #[tokio::test]
    async fn test_fetch_first_page() {
        let (store, _) = store();
        store.fetch_contents(1, 2).await;

        let state = store.snapshot();
        assert_eq!(state.contents.len(), 2);
        assert_eq!(state.contents[0].id, "1");
        assert_eq!(state.total, 3);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 2);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_fetch_past_the_end_is_empty() {
        let (store, _) = store();
        store.fetch_contents(5, 10).await;

        let state = store.snapshot();
        assert!(state.contents.is_empty());
        assert_eq!(state.total, 3);
        assert_eq!(state.page, 5);
    }

    #[tokio::test]
    async fn test_fetch_with_zero_page_is_ignored() {
        let (store, service) = store();
        store.fetch_contents(0, 10).await;
        store.fetch_contents(1, 0).await;

        assert_eq!(store.snapshot(), ContentState::default());
        assert!(service.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_state() {
        let (store, service) = store();
        store.fetch_contents(1, 10).await;
        let before = store.snapshot();

        service.set_contents_should_fail(true);
        store.fetch_contents(2, 1).await;

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_create_is_local_only() {
        let (store, service) = store();
        store
            .create_content(ContentDraft::new().with_title("Notice"))
            .await;

        let state = store.snapshot();
        assert_eq!(state.contents.len(), 1);
        assert_eq!(state.contents[0].title, "Notice");
        assert_eq!(state.contents[0].status, ContentStatus::Draft);
        assert_eq!(state.total, 1);
        assert!(service.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let (store, _) = store();
        for _ in 0..5 {
            store.create_content(ContentDraft::new()).await;
        }

        let state = store.snapshot();
        let mut ids: Vec<_> = state.contents.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let (store, _) = store();
        store.fetch_contents(1, 10).await;
        let before = store.snapshot();

        store
            .update_content("missing", ContentPatch::new().with_title("X"))
            .await;

        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_search_matches_title_and_body_case_insensitively() {
        let (store, _) = store();
        store.fetch_contents(1, 10).await;
        store
            .update_content("3", ContentPatch::new().with_body("Green City Parks"))
            .await;

        store.search_contents("green city").await;

        let state = store.snapshot();
        assert_eq!(state.contents.len(), 1);
        assert_eq!(state.contents[0].id, "3");
        assert_eq!(state.total, 1);
    }

    #[tokio::test]
    async fn test_search_only_sees_loaded_page() {
        let (store, _) = store();
        store.fetch_contents(1, 1).await;

        // Item 3 exists in the dataset but is not on the loaded page
        store.search_contents("城市绿化").await;

        assert!(store.snapshot().contents.is_empty());
        assert_eq!(store.snapshot().total, 0);
    }

    #[tokio::test]
    async fn test_audit_records_decision() {
        let (store, _) = store();
        store.fetch_contents(1, 10).await;
        let before = store.snapshot().get("2").unwrap().updated_at;

        store
            .audit_content(
                "2",
                AuditDecision::Reject,
                "审核员",
                Some("图片需替换".to_string()),
            )
            .await;

        let state = store.snapshot();
        let item = state.get("2").unwrap();
        assert_eq!(item.status, ContentStatus::Rejected);
        assert_eq!(item.audit_history.len(), 1);
        assert_eq!(item.audit_history[0].reviewer, "审核员");
        assert_eq!(item.audit_history[0].comment.as_deref(), Some("图片需替换"));
        assert!(item.updated_at > before);
    }

    #[tokio::test]
    async fn test_audit_unknown_id_is_noop() {
        let (store, _) = store();
        store.fetch_contents(1, 10).await;
        let before = store.snapshot();

        store
            .audit_content("missing", AuditDecision::Approve, "审核员", None)
            .await;

        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_status_helpers() {
        let (store, _) = store();
        store.fetch_contents(1, 10).await;
        let state = store.snapshot();

        assert_eq!(state.filter_by_status(None).len(), 3);
        let pending = state.filter_by_status(Some(ContentStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "2");

        let counts = state.status_counts();
        assert_eq!(counts[&ContentStatus::Approved], 1);
        assert_eq!(counts[&ContentStatus::Pending], 1);
        assert_eq!(counts[&ContentStatus::Draft], 1);
        assert_eq!(counts[&ContentStatus::Rejected], 0);
    }

    #[tokio::test]
    async fn test_reload_uses_current_cursor() {
        let (store, service) = store();
        store.fetch_contents(2, 2).await;
        store.search_contents("nothing matches this").await;
        assert!(store.snapshot().contents.is_empty());

        store.reload().await;

        let state = store.snapshot();
        assert_eq!(state.contents.len(), 1);
        assert_eq!(state.contents[0].id, "3");
        assert_eq!(service.calls().await, vec!["list_contents", "list_contents"]);
    }

    #[tokio::test]
    async fn test_reset() {
        let service = MockDataService::new().with_latency(Duration::ZERO);
        let store = ContentStore::with_page_size(Arc::new(service), 20);
        store.fetch_contents(1, 2).await;

        store.reset();

        assert_eq!(store.snapshot(), ContentState::new(20));
    }
}
