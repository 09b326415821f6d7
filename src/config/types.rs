use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::query::QueryConfig;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub query: QuerySettings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote users endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Scheme + host of the REST service (e.g., "https://jsonplaceholder.typicode.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the users resource, appended to `base_url`.
    #[serde(default = "default_users_path")]
    pub users_path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Artificial delay before each request, to make the loading state visible.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

/// Query cache behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySettings {
    /// Retries after the first failed attempt (default: 2).
    #[serde(default = "default_retry")]
    pub retry: u32,
    /// Age after which cached data is refetched on subscribe (default: 5 minutes).
    #[serde(default = "default_stale_time_ms")]
    pub stale_time_ms: u64,
    /// First retry backoff in milliseconds, doubled per retry (default: 1000).
    #[serde(default = "default_retry_delay_base_ms")]
    pub retry_delay_base_ms: u64,
    /// Upper bound for the retry backoff in milliseconds (default: 30000).
    #[serde(default = "default_retry_delay_max_ms")]
    pub retry_delay_max_ms: u64,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// How long the "loaded successfully" banner stays up after a refresh.
    #[serde(default = "default_success_banner_ms")]
    pub success_banner_ms: u64,
    /// Terminal UI redraw interval.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_users_path() -> String {
    "/users".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_retry() -> u32 {
    2
}

fn default_stale_time_ms() -> u64 {
    5 * 60 * 1000
}

fn default_retry_delay_base_ms() -> u64 {
    1000
}

fn default_retry_delay_max_ms() -> u64 {
    30_000
}

fn default_success_banner_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            simulated_latency_ms: 0,
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            retry: default_retry(),
            stale_time_ms: default_stale_time_ms(),
            retry_delay_base_ms: default_retry_delay_base_ms(),
            retry_delay_max_ms: default_retry_delay_max_ms(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            success_banner_ms: default_success_banner_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl ApiSettings {
    /// Full URL of the users resource.
    pub fn users_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.users_path.starts_with('/') {
            format!("{}{}", base, self.users_path)
        } else {
            format!("{}/{}", base, self.users_path)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl UiSettings {
    pub fn success_banner(&self) -> Duration {
        Duration::from_millis(self.success_banner_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl From<&QuerySettings> for QueryConfig {
    fn from(settings: &QuerySettings) -> Self {
        Self {
            retry: settings.retry,
            stale_time: Duration::from_millis(settings.stale_time_ms),
            retry_delay_base: Duration::from_millis(settings.retry_delay_base_ms),
            retry_delay_max: Duration::from_millis(settings.retry_delay_max_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_url_joins_base_and_path() {
        let api = ApiSettings::default();
        assert_eq!(api.users_url(), "https://jsonplaceholder.typicode.com/users");
    }

    #[test]
    fn users_url_tolerates_slashes() {
        let api = ApiSettings {
            base_url: "http://127.0.0.1:9000/".to_string(),
            users_path: "users".to_string(),
            ..ApiSettings::default()
        };
        assert_eq!(api.users_url(), "http://127.0.0.1:9000/users");
    }

    #[test]
    fn query_settings_convert_to_durations() {
        let config = QueryConfig::from(&QuerySettings::default());
        assert_eq!(config.retry, 2);
        assert_eq!(config.stale_time, Duration::from_secs(300));
        assert_eq!(config.retry_delay_base, Duration::from_secs(1));
        assert_eq!(config.retry_delay_max, Duration::from_secs(30));
    }
}
