/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECONDS, DEFAULT_PAGE_SIZE,
    DEFAULT_POOL_IDLE_TIMEOUT_SECONDS, DEFAULT_POOL_MAX_IDLE_PER_HOST, DEFAULT_RATE_LIMIT_CALLS,
    DEFAULT_RATE_LIMIT_WINDOW_SECONDS, DEFAULT_READ_TIMEOUT_SECONDS,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;
use tracing::{debug, error};

/// Replaces a secret with a fixed mask when serialized
fn redact<S: Serializer>(_: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("***")
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Account credentials exchanged for a session token
///
/// The keys are masked whenever the value is printed or serialized.
pub struct Credentials {
    /// Login email of the account
    pub email: String,
    /// Public key of the account
    #[serde(serialize_with = "redact")]
    pub public_key: String,
    /// API key of the account
    #[serde(serialize_with = "redact")]
    pub api_key: String,
}

impl Credentials {
    /// Creates credentials from their three parts
    pub fn new(
        email: impl Into<String>,
        public_key: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            public_key: public_key.into(),
            api_key: api_key.into(),
        }
    }

    /// `true` when every part is filled in
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty()
            && !self.public_key.trim().is_empty()
            && !self.api_key.trim().is_empty()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds
    pub read_timeout_secs: u64,
    /// Idle pooled connections are closed after this many seconds
    pub pool_idle_timeout_secs: u64,
    /// Maximum idle pooled connections per host
    pub pool_max_idle_per_host: usize,
    /// Records requested per page on list endpoints
    pub page_size: u32,
    /// Default deadline for one logical call, in seconds
    pub deadline_secs: Option<u64>,
}

impl RestApiConfig {
    /// Joins the base URL and an endpoint path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Connect timeout as a [`Duration`]
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Read timeout as a [`Duration`]
    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// Pool idle timeout as a [`Duration`]
    #[must_use]
    pub fn pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_secs)
    }

    /// Default deadline as a [`Duration`]
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_secs.map(Duration::from_secs)
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECONDS,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECONDS,
            pool_idle_timeout_secs: DEFAULT_POOL_IDLE_TIMEOUT_SECONDS,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            page_size: DEFAULT_PAGE_SIZE,
            deadline_secs: None,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Calls assumed available when a window opens
    pub max_calls: u32,
    /// Window length in seconds
    pub window_seconds: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_calls: DEFAULT_RATE_LIMIT_CALLS,
            window_seconds: DEFAULT_RATE_LIMIT_WINDOW_SECONDS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the Eduzz API client
pub struct Config {
    /// Account credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Retry configuration for API requests
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment, loading `.env` first
    ///
    /// Missing credentials are logged and left empty; the first call will
    /// then fail with an authentication error.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email = get_env_or_default("EDUZZ_LOGIN", String::new());
        let public_key = get_env_or_default("EDUZZ_PUBKEY", String::new());
        let api_key = get_env_or_default("EDUZZ_APIKEY", String::new());

        if email.is_empty() {
            error!("EDUZZ_LOGIN not found in environment variables or .env file");
        }
        if public_key.is_empty() {
            error!("EDUZZ_PUBKEY not found in environment variables or .env file");
        }
        if api_key.is_empty() {
            error!("EDUZZ_APIKEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                email,
                public_key,
                api_key,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("EDUZZ_REST_BASE_URL", DEFAULT_BASE_URL.to_string()),
                connect_timeout_secs: get_env_or_default(
                    "EDUZZ_CONNECT_TIMEOUT",
                    DEFAULT_CONNECT_TIMEOUT_SECONDS,
                ),
                read_timeout_secs: get_env_or_default(
                    "EDUZZ_READ_TIMEOUT",
                    DEFAULT_READ_TIMEOUT_SECONDS,
                ),
                pool_idle_timeout_secs: get_env_or_default(
                    "EDUZZ_POOL_IDLE_TIMEOUT",
                    DEFAULT_POOL_IDLE_TIMEOUT_SECONDS,
                ),
                pool_max_idle_per_host: get_env_or_default(
                    "EDUZZ_POOL_MAX_IDLE_PER_HOST",
                    DEFAULT_POOL_MAX_IDLE_PER_HOST,
                ),
                page_size: get_env_or_default("EDUZZ_PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1),
                deadline_secs: get_env_or_none("EDUZZ_DEADLINE_SECS"),
            },
            rate_limiter: RateLimiterConfig {
                max_calls: get_env_or_default("EDUZZ_RATE_LIMIT_CALLS", DEFAULT_RATE_LIMIT_CALLS),
                window_seconds: get_env_or_default(
                    "EDUZZ_RATE_LIMIT_WINDOW_SECONDS",
                    DEFAULT_RATE_LIMIT_WINDOW_SECONDS,
                ),
            },
            retry: RetryConfig::default(),
        }
    }

    /// Creates a configuration with explicit credentials and built-in defaults,
    /// without reading the environment
    pub fn with_credentials(credentials: Credentials) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
            retry: RetryConfig::new(),
        }
    }

    /// Points the client at another base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Replaces the retry configuration
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Replaces the rate limiter configuration
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    /// Sets the records requested per page
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.rest_api.page_size = page_size.max(1);
        self
    }

    /// Sets the default deadline for every call
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.rest_api.deadline_secs = Some(deadline.as_secs().max(1));
        self
    }
}
