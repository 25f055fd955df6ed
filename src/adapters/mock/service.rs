//! Mock data service.
//!
//! Answers every [`DataService`] call from the canned fixtures after a fixed
//! simulated delay. Sign-in accepts any credentials. Failure injection and a
//! call log let tests drive the stores' error paths and check which calls
//! reached the service.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::fixtures;
use crate::error::ServiceError;
use crate::models::{AuthIdentity, ContentItem, ContentStats, HotTopic, UserBehavior};
use crate::traits::DataService;

/// Default simulated latency for every call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Mock data service with canned data.
///
/// Starts with the seeded admin session reported by [`DataService::current_user`].
/// `sign_in` replaces the session, `sign_out` clears it.
///
/// # Example
///
/// ```ignore
/// use content_factory::adapters::MockDataService;
/// use std::time::Duration;
///
/// let service = MockDataService::new().with_latency(Duration::ZERO);
/// service.set_analysis_should_fail(true);
/// ```
#[derive(Debug, Clone)]
pub struct MockDataService {
    /// Delay applied before every answer
    latency: Duration,
    /// Session reported by `current_user`
    session: Arc<Mutex<Option<AuthIdentity>>>,
    /// Dataset returned by `list_contents`
    contents: Arc<Mutex<Vec<ContentItem>>>,
    /// Names of the operations called so far
    calls: Arc<Mutex<Vec<&'static str>>>,
    /// Whether auth operations should fail
    auth_should_fail: Arc<AtomicBool>,
    /// Whether content listing should fail
    contents_should_fail: Arc<AtomicBool>,
    /// Whether analysis queries should fail
    analysis_should_fail: Arc<AtomicBool>,
}

impl MockDataService {
    /// Create a mock service with the default latency and seeded session.
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            session: Arc::new(Mutex::new(Some(fixtures::seeded_identity()))),
            contents: Arc::new(Mutex::new(fixtures::contents())),
            calls: Arc::new(Mutex::new(Vec::new())),
            auth_should_fail: Arc::new(AtomicBool::new(false)),
            contents_should_fail: Arc::new(AtomicBool::new(false)),
            analysis_should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a mock service that reports no session until someone signs in.
    pub fn without_session() -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
            ..Self::new()
        }
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the content dataset.
    pub fn with_contents(self, contents: Vec<ContentItem>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(contents)),
            ..self
        }
    }

    /// The configured simulated latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Configure whether sign-in, sign-out and current-user calls fail.
    pub fn set_auth_should_fail(&self, should_fail: bool) {
        self.auth_should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Configure whether content listing fails.
    pub fn set_contents_should_fail(&self, should_fail: bool) {
        self.contents_should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Configure whether analysis queries fail.
    pub fn set_analysis_should_fail(&self, should_fail: bool) {
        self.analysis_should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Get the session currently reported by the service.
    pub async fn session(&self) -> Option<AuthIdentity> {
        self.session.lock().await.clone()
    }

    /// Get the names of all operations called so far, in order.
    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }

    /// Clear the call log.
    pub async fn clear_calls(&self) {
        self.calls.lock().await.clear();
    }

    /// Record the call, wait out the latency, then check the failure flag.
    async fn simulate(&self, operation: &'static str, flag: &AtomicBool) -> Result<(), ServiceError> {
        self.calls.lock().await.push(operation);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if flag.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable {
                operation: operation.to_string(),
                message: "Mock failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockDataService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataService for MockDataService {
    async fn sign_in(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<Option<AuthIdentity>, ServiceError> {
        self.simulate("sign_in", &self.auth_should_fail).await?;
        let identity = fixtures::identity_for(email);
        *self.session.lock().await = Some(identity.clone());
        Ok(Some(identity))
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        self.simulate("sign_out", &self.auth_should_fail).await?;
        *self.session.lock().await = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthIdentity>, ServiceError> {
        self.simulate("current_user", &self.auth_should_fail).await?;
        Ok(self.session.lock().await.clone())
    }

    async fn list_contents(&self) -> Result<Vec<ContentItem>, ServiceError> {
        self.simulate("list_contents", &self.contents_should_fail)
            .await?;
        Ok(self.contents.lock().await.clone())
    }

    async fn hot_topics(&self) -> Result<Vec<HotTopic>, ServiceError> {
        self.simulate("hot_topics", &self.analysis_should_fail).await?;
        Ok(fixtures::hot_topics())
    }

    async fn content_stats(&self) -> Result<ContentStats, ServiceError> {
        self.simulate("content_stats", &self.analysis_should_fail)
            .await?;
        Ok(fixtures::content_stats())
    }

    async fn user_behaviors(&self) -> Result<Vec<UserBehavior>, ServiceError> {
        self.simulate("user_behaviors", &self.analysis_should_fail)
            .await?;
        Ok(fixtures::user_behaviors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> MockDataService {
        MockDataService::new().with_latency(Duration::ZERO)
    }

    #[test]
    fn test_default_latency() {
        assert_eq!(MockDataService::default().latency(), DEFAULT_LATENCY);
    }

    #[tokio::test]
    async fn test_sign_in_accepts_any_credentials() {
        let service = instant();
        let identity = service
            .sign_in("someone@example.com", "")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(identity.id, fixtures::MOCK_USER_ID);
        assert_eq!(identity.email.as_deref(), Some("someone@example.com"));
        assert_eq!(service.session().await, Some(identity));
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let service = instant();
        assert!(service.current_user().await.unwrap().is_some());

        service.sign_out().await.unwrap();
        assert!(service.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_without_session() {
        let service = MockDataService::without_session().with_latency(Duration::ZERO);
        assert!(service.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failure_flags_are_scoped() {
        let service = instant();
        service.set_analysis_should_fail(true);

        assert!(service.hot_topics().await.is_err());
        assert!(service.content_stats().await.is_err());
        assert!(service.user_behaviors().await.is_err());
        assert!(service.list_contents().await.is_ok());
        assert!(service.sign_in("a@b.c", "x").await.is_ok());

        service.set_analysis_should_fail(false);
        assert!(service.hot_topics().await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_session() {
        let service = instant();
        service.set_auth_should_fail(true);

        let err = service.sign_in("a@b.c", "x").await.unwrap_err();
        assert_eq!(err.operation(), "sign_in");
        assert_eq!(service.session().await, Some(fixtures::seeded_identity()));
    }

    #[tokio::test]
    async fn test_call_log() {
        let service = instant();
        service.list_contents().await.unwrap();
        service.content_stats().await.unwrap();

        assert_eq!(service.calls().await, vec!["list_contents", "content_stats"]);

        service.clear_calls().await;
        assert!(service.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_with_contents_overrides_dataset() {
        let service = instant().with_contents(Vec::new());
        assert!(service.list_contents().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let service = MockDataService::new().with_latency(Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        service.hot_topics().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
