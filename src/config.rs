//! Application configuration.
//!
//! Read once at startup from `CONTENT_FACTORY_*` environment variables, with
//! builder methods for overrides in tests and the demo binary. Service keys
//! are carried for a future real backend; the mock service ignores them.

use std::time::Duration;

use crate::adapters::mock::DEFAULT_LATENCY;
use crate::error::ConfigError;
use crate::state::DEFAULT_PAGE_SIZE;

/// Display name of the application.
pub const APP_NAME: &str = "政务新媒体AI内容工厂";

pub const ENV_API_URL: &str = "CONTENT_FACTORY_API_URL";
pub const ENV_SUPABASE_URL: &str = "CONTENT_FACTORY_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "CONTENT_FACTORY_SUPABASE_ANON_KEY";
pub const ENV_OPENAI_KEY: &str = "CONTENT_FACTORY_OPENAI_KEY";
pub const ENV_BAIDU_AI_KEY: &str = "CONTENT_FACTORY_BAIDU_AI_KEY";
pub const ENV_MOCK_LATENCY_MS: &str = "CONTENT_FACTORY_MOCK_LATENCY_MS";
pub const ENV_PAGE_SIZE: &str = "CONTENT_FACTORY_PAGE_SIZE";

/// Settings shared by the stores and the data service.
///
/// # Example
///
/// ```ignore
/// use content_factory::config::AppConfig;
/// use std::time::Duration;
///
/// let config = AppConfig::default()
///     .with_mock_latency(Duration::ZERO)
///     .with_default_page_size(20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    pub version: String,
    /// Base URL of the application API
    pub api_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Empty when not configured
    pub openai_key: String,
    /// Empty when not configured
    pub baidu_ai_key: String,
    /// Delay the mock service applies to every call
    pub mock_latency: Duration,
    /// Page size the content store starts with
    pub default_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_url: "http://localhost:3000".to_string(),
            supabase_url: "https://mock-supabase-url.supabase.co".to_string(),
            supabase_anon_key: "mock-anon-key-for-demo".to_string(),
            openai_key: String::new(),
            baidu_ai_key: String::new(),
            mock_latency: DEFAULT_LATENCY,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Create an AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// variables it does not know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_url = url;
        }
        if let Some(url) = lookup(ENV_SUPABASE_URL) {
            config.supabase_url = url;
        }
        if let Some(key) = lookup(ENV_SUPABASE_ANON_KEY) {
            config.supabase_anon_key = key;
        }
        if let Some(key) = lookup(ENV_OPENAI_KEY) {
            config.openai_key = key;
        }
        if let Some(key) = lookup(ENV_BAIDU_AI_KEY) {
            config.baidu_ai_key = key;
        }
        if let Some(raw) = lookup(ENV_MOCK_LATENCY_MS) {
            let millis = parse_number::<u64>(ENV_MOCK_LATENCY_MS, &raw, "number of milliseconds")?;
            config.mock_latency = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            let size = parse_number::<usize>(ENV_PAGE_SIZE, &raw, "positive integer")?;
            if size == 0 {
                return Err(ConfigError::OutOfRange {
                    var: ENV_PAGE_SIZE.to_string(),
                    reason: "page size must be at least 1".to_string(),
                });
            }
            config.default_page_size = size;
        }

        Ok(config)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_supabase(mut self, url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        self.supabase_url = url.into();
        self.supabase_anon_key = anon_key.into();
        self
    }

    /// Set the mock service delay.
    pub fn with_mock_latency(mut self, latency: Duration) -> Self {
        self.mock_latency = latency;
        self
    }

    /// Set the initial page size. Zero is raised to 1.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size.max(1);
        self
    }

    /// Whether an AI provider key is configured.
    pub fn has_ai_keys(&self) -> bool {
        !self.openai_key.is_empty() || !self.baidu_ai_key.is_empty()
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &str,
    raw: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var: var.to_string(),
        value: raw.to_string(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    fn clear_env() {
        for var in [
            ENV_API_URL,
            ENV_SUPABASE_URL,
            ENV_SUPABASE_ANON_KEY,
            ENV_OPENAI_KEY,
            ENV_BAIDU_AI_KEY,
            ENV_MOCK_LATENCY_MS,
            ENV_PAGE_SIZE,
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app_name, APP_NAME);
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.mock_latency, Duration::from_millis(500));
        assert_eq!(config.default_page_size, 10);
        assert!(!config.has_ai_keys());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://api.example.gov.cn"),
            (ENV_OPENAI_KEY, "sk-test"),
            (ENV_MOCK_LATENCY_MS, "0"),
            (ENV_PAGE_SIZE, " 25 "),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.example.gov.cn");
        assert!(config.has_ai_keys());
        assert_eq!(config.mock_latency, Duration::ZERO);
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.supabase_anon_key, "mock-anon-key-for-demo");
    }

    #[test]
    fn test_malformed_latency() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_MOCK_LATENCY_MS, "fast")])).unwrap_err();
        assert_eq!(err.error_code(), "E_CFG_NUMBER");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_api_url("http://127.0.0.1:8080")
            .with_supabase("https://x.supabase.co", "anon")
            .with_default_page_size(0);
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.supabase_url, "https://x.supabase.co");
        assert_eq!(config.default_page_size, 1);
    }

    #[test]
    #[serial]
    fn test_from_env_empty() {
        clear_env();
        assert_eq!(AppConfig::from_env().unwrap(), AppConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        std::env::set_var(ENV_PAGE_SIZE, "5");
        std::env::set_var(ENV_BAIDU_AI_KEY, "baidu");

        let config = AppConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.baidu_ai_key, "baidu");
    }

    #[test]
    #[serial]
    fn test_from_env_malformed_page_size() {
        clear_env();
        std::env::set_var(ENV_PAGE_SIZE, "ten");

        let result = AppConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::InvalidNumber { .. })));
    }
}
