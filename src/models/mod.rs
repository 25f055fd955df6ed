//! Domain models shared by the stores and the data service.

mod analysis;
mod content;
mod user;

pub use analysis::{ContentStats, HotTopic, KindBreakdown, Trend, UserBehavior};
pub use content::{
    AuditDecision, AuditRecord, ContentDraft, ContentItem, ContentKind, ContentPatch,
    ContentStatus, CURRENT_USER_ID, CURRENT_USER_NAME, DEFAULT_TITLE,
};
pub use user::{AuthIdentity, User, SESSION_DEPARTMENT, SESSION_NAME, SESSION_ROLE};
