//! Data service trait abstraction.
//!
//! The stores talk to their backend only through [`DataService`]. The crate
//! ships [`MockDataService`](crate::adapters::MockDataService), which answers
//! from canned fixtures after a simulated delay; a real backend client can be
//! dropped in behind the same trait.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::{AuthIdentity, ContentItem, ContentStats, HotTopic, UserBehavior};

/// Backend operations the stores depend on.
///
/// Filtering, pagination and mutation of content live in the stores; the
/// service only hands back whole collections.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Sign in with an email and password.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` when the service accepted the credentials
    /// - `Ok(None)` when it answered without a user; callers keep their
    ///   current session and treat this as a non-error
    /// - `Err(error)` if the call failed
    async fn sign_in(&self, email: &str, password: &str)
        -> Result<Option<AuthIdentity>, ServiceError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), ServiceError>;

    /// Identity of the currently signed-in user, if the service has one.
    async fn current_user(&self) -> Result<Option<AuthIdentity>, ServiceError>;

    /// The full content dataset, newest first.
    async fn list_contents(&self) -> Result<Vec<ContentItem>, ServiceError>;

    /// Trending topics snapshot.
    async fn hot_topics(&self) -> Result<Vec<HotTopic>, ServiceError>;

    /// Aggregate content counts.
    async fn content_stats(&self) -> Result<ContentStats, ServiceError>;

    /// Daily engagement series.
    async fn user_behaviors(&self) -> Result<Vec<UserBehavior>, ServiceError>;
}
