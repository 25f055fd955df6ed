//! Content items and the typed inputs used to create and edit them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Title given to a new item when the draft does not provide one.
pub const DEFAULT_TITLE: &str = "新内容";
/// Owner id assigned to locally created items.
pub const CURRENT_USER_ID: &str = "current-user";
/// Owner display name assigned to locally created items.
pub const CURRENT_USER_NAME: &str = "当前用户";

/// Media kind of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    Image,
    Video,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Text, ContentKind::Image, ContentKind::Video];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::Video => "video",
        }
    }
}

/// Moderation lifecycle of a content item.
///
/// The store does not enforce an ordering between these states; any status can
/// be written through [`ContentPatch::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 4] = [
        ContentStatus::Draft,
        ContentStatus::Pending,
        ContentStatus::Approved,
        ContentStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Pending => "pending",
            ContentStatus::Approved => "approved",
            ContentStatus::Rejected => "rejected",
        }
    }

    /// Display label used by the audit screens.
    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "草稿",
            ContentStatus::Pending => "待审核",
            ContentStatus::Approved => "已通过",
            ContentStatus::Rejected => "已驳回",
        }
    }
}

/// Outcome of a review on the audit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditDecision {
    Approve,
    Reject,
}

impl AuditDecision {
    /// Status an item ends up in after this decision.
    pub fn resulting_status(&self) -> ContentStatus {
        match self {
            AuditDecision::Approve => ContentStatus::Approved,
            AuditDecision::Reject => ContentStatus::Rejected,
        }
    }
}

/// One entry of an item's review history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub at: DateTime<Utc>,
    pub reviewer: String,
    pub decision: AuditDecision,
    pub comment: Option<String>,
}

/// A unit of government-affairs media content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Body text; named `content` on the wire.
    #[serde(rename = "content")]
    pub body: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub status: ContentStatus,
    pub user_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audit_history: Vec<AuditRecord>,
}

impl ContentItem {
    /// Build a locally created draft from a partial input.
    pub fn from_draft(id: String, draft: ContentDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            body: draft.body.unwrap_or_default(),
            kind: draft.kind.unwrap_or_default(),
            status: ContentStatus::Draft,
            user_id: CURRENT_USER_ID.to_string(),
            user_name: CURRENT_USER_NAME.to_string(),
            created_at: now,
            updated_at: now,
            tags: Some(draft.tags.unwrap_or_default()),
            metadata: draft.metadata,
            audit_history: Vec::new(),
        }
    }

    /// Case-insensitive substring match against title and body.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }

    /// Merge the set fields of `patch` into this item and bump `updated_at`.
    pub fn apply(&mut self, patch: ContentPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(tags) = patch.tags {
            self.tags = Some(tags);
        }
        if let Some(metadata) = patch.metadata {
            self.metadata = Some(metadata);
        }
        self.touch(now);
    }

    /// Advance `updated_at` to `now`, or one microsecond past its current value
    /// when the clock has not moved forward.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// Partial input for creating an item. Unset fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDraft {
    pub title: Option<String>,
    pub body: Option<String>,
    pub kind: Option<ContentKind>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<serde_json::Value>,
}

impl ContentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Partial input for editing an item. Only set fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub kind: Option<ContentKind>,
    pub status: Option<ContentStatus>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<serde_json::Value>,
}

impl ContentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
