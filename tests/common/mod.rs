//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//!
//! let service = common::instant_service();
//! let stores = common::stores_over(&service);
//! ```

#![allow(dead_code)]

use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

use content_factory::adapters::MockDataService;
use content_factory::app::AppStores;
use content_factory::config::AppConfig;
use content_factory::models::{ContentDraft, ContentItem, ContentKind};

/// Mock service that answers immediately.
pub fn instant_service() -> MockDataService {
    MockDataService::new().with_latency(Duration::ZERO)
}

/// Config with no simulated latency.
pub fn test_config() -> AppConfig {
    AppConfig::default().with_mock_latency(Duration::ZERO)
}

/// Stores sharing `service`, so tests can flip its failure toggles.
pub fn stores_over(service: &MockDataService) -> AppStores {
    AppStores::new(test_config(), Arc::new(service.clone()))
}

/// A dataset of `count` items with ids `"1"..=count`, newest first.
pub fn numbered_contents(count: usize) -> Vec<ContentItem> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (1..=count)
        .map(|n| {
            let kind = match n % 3 {
                0 => ContentKind::Video,
                1 => ContentKind::Text,
                _ => ContentKind::Image,
            };
            ContentItem::from_draft(
                n.to_string(),
                ContentDraft::new()
                    .with_title(format!("Item {}", n))
                    .with_body(format!("Body of item {}", n))
                    .with_kind(kind),
                base - ChronoDuration::hours(n as i64),
            )
        })
        .collect()
}
