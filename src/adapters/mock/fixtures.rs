//! Canned records served by the mock data service.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    AuthIdentity, ContentItem, ContentKind, ContentStats, ContentStatus, HotTopic, KindBreakdown,
    Trend, UserBehavior,
};

/// Email of the session the mock service starts with.
pub const SEEDED_EMAIL: &str = "admin@gov.cn";

/// Id every mock identity is given.
pub const MOCK_USER_ID: &str = "1";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn tags(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|t| t.to_string()).collect())
}

/// Identity returned for a sign-in with `email`.
pub fn identity_for(email: &str) -> AuthIdentity {
    AuthIdentity {
        id: MOCK_USER_ID.to_string(),
        email: Some(email.to_string()),
    }
}

/// The session the mock service reports before anyone signs in.
pub fn seeded_identity() -> AuthIdentity {
    identity_for(SEEDED_EMAIL)
}

/// The full content dataset, newest first.
pub fn contents() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: "1".to_string(),
            title: "关于优化营商环境的政策解读".to_string(),
            body: "为进一步优化营商环境，提升政务服务效能，我市推出一系列创新举措...".to_string(),
            kind: ContentKind::Text,
            status: ContentStatus::Approved,
            user_id: "user1".to_string(),
            user_name: "张编辑".to_string(),
            created_at: at(2024, 1, 15, 10, 30),
            updated_at: at(2024, 1, 15, 14, 20),
            tags: tags(&["政策解读", "营商环境"]),
            metadata: None,
            audit_history: Vec::new(),
        },
        ContentItem {
            id: "2".to_string(),
            title: "政务服务便民措施宣传海报".to_string(),
            body: "设计精美的政务服务便民措施宣传海报，包含二维码和联系方式...".to_string(),
            kind: ContentKind::Image,
            status: ContentStatus::Pending,
            user_id: "user2".to_string(),
            user_name: "李设计".to_string(),
            created_at: at(2024, 1, 14, 9, 15),
            updated_at: at(2024, 1, 14, 11, 30),
            tags: tags(&["宣传海报", "便民服务"]),
            metadata: None,
            audit_history: Vec::new(),
        },
        ContentItem {
            id: "3".to_string(),
            title: "城市绿化建设成果展示".to_string(),
            body: "展示我市近年来城市绿化建设的显著成果，包括公园建设、道路绿化等...".to_string(),
            kind: ContentKind::Video,
            status: ContentStatus::Draft,
            user_id: "user3".to_string(),
            user_name: "王记者".to_string(),
            created_at: at(2024, 1, 13, 16, 45),
            updated_at: at(2024, 1, 13, 16, 45),
            tags: tags(&["城市建设", "绿化成果"]),
            metadata: None,
            audit_history: Vec::new(),
        },
    ]
}

fn topic(id: &str, title: &str, category: &str, heat: u32, trend: Trend, mentions: u64) -> HotTopic {
    HotTopic {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        heat,
        trend,
        mentions,
    }
}

/// Trending topics, hottest first.
pub fn hot_topics() -> Vec<HotTopic> {
    vec![
        topic("1", "营商环境优化", "政策解读", 95, Trend::Up, 1250),
        topic("2", "便民服务措施", "民生服务", 88, Trend::Stable, 980),
        topic("3", "城市建设成果", "城市发展", 82, Trend::Up, 756),
        topic("4", "环保政策宣传", "环境保护", 76, Trend::Down, 642),
        topic("5", "教育改革创新", "教育事业", 71, Trend::Up, 534),
    ]
}

/// Aggregate counts for the dashboard.
pub fn content_stats() -> ContentStats {
    ContentStats {
        total: 156,
        published: 89,
        pending: 34,
        rejected: 33,
        by_kind: KindBreakdown {
            text: 89,
            image: 45,
            video: 22,
        },
    }
}

fn day(date: &str, views: u64, shares: u64, likes: u64, comments: u64) -> UserBehavior {
    UserBehavior {
        date: date.to_string(),
        views,
        shares,
        likes,
        comments,
    }
}

/// One week of engagement.
pub fn user_behaviors() -> Vec<UserBehavior> {
    vec![
        day("2024-01-01", 1200, 89, 234, 45),
        day("2024-01-02", 1350, 95, 267, 52),
        day("2024-01-03", 1180, 78, 198, 38),
        day("2024-01-04", 1420, 112, 289, 67),
        day("2024-01-05", 1680, 134, 345, 78),
        day("2024-01-06", 1590, 128, 312, 71),
        day("2024-01-07", 1720, 145, 378, 89),
    ]
}
