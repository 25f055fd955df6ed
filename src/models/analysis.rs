//! Read-only analytics snapshots.

use serde::{Deserialize, Serialize};

use super::content::ContentKind;

/// Direction a hot topic is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// A trending topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotTopic {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Higher is hotter.
    pub heat: u32,
    pub trend: Trend,
    pub mentions: u64,
}

/// Per-kind item counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindBreakdown {
    pub text: u64,
    pub image: u64,
    pub video: u64,
}

impl KindBreakdown {
    pub fn get(&self, kind: ContentKind) -> u64 {
        match kind {
            ContentKind::Text => self.text,
            ContentKind::Image => self.image,
            ContentKind::Video => self.video,
        }
    }

    pub fn sum(&self) -> u64 {
        self.text + self.image + self.video
    }
}

/// Aggregate content counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
    pub total: u64,
    pub published: u64,
    pub pending: u64,
    pub rejected: u64,
    #[serde(rename = "byType")]
    pub by_kind: KindBreakdown,
}

/// One day of audience engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBehavior {
    /// ISO date, e.g. `2024-01-01`.
    pub date: String,
    pub views: u64,
    pub shares: u64,
    pub likes: u64,
    pub comments: u64,
}

impl UserBehavior {
    /// Shares, likes and comments combined.
    pub fn interactions(&self) -> u64 {
        self.shares + self.likes + self.comments
    }
}
