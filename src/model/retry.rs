/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Retry configuration and the canonical retry policy
//!
//! | Failure                   | Strategy                                   | Exhausted as          |
//! |---------------------------|--------------------------------------------|-----------------------|
//! | 429                       | `base * 2^(attempt-1) + jitter`, max 60s   | `RateLimitExceeded`   |
//! | 500, 502, 503, 504        | `base * attempt`, max 60s                  | `UpstreamServer`      |
//! | other status, send errors | not retried                                | `Transport`           |

use crate::constants::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_RETRY_MAX_JITTER_MS,
    MAX_RETRY_DELAY_SECONDS,
};
use crate::error::{AppError, TransportError};
use crate::utils::config::get_env_or_none;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use rand::Rng;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for HTTP request retry behavior
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per request, first try included (minimum 1)
    pub max_attempts: u32,
    /// Base delay in milliseconds for both backoff strategies
    pub base_delay_ms: u64,
    /// Exclusive upper bound of the jitter added on 429, in milliseconds
    pub max_jitter_ms: u64,
    /// Cap for any single delay, in seconds
    pub max_delay_secs: u64,
}

impl RetryConfig {
    /// Creates the built-in configuration, ignoring the environment
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            max_jitter_ms: DEFAULT_RETRY_MAX_JITTER_MS,
            max_delay_secs: MAX_RETRY_DELAY_SECONDS,
        }
    }

    /// Creates a configuration with a custom attempt cap and base delay
    #[must_use]
    pub fn with_attempts_and_delay(max_attempts: u32, base_delay_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay_ms,
            ..Self::new()
        }
    }

    /// Replaces the jitter bound
    #[must_use]
    pub fn with_max_jitter(mut self, max_jitter_ms: u64) -> Self {
        self.max_jitter_ms = max_jitter_ms;
        self
    }

    /// Base delay as a [`Duration`]
    #[must_use]
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Delay cap as a [`Duration`]
    #[must_use]
    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }
}

impl Default for RetryConfig {
    /// Built-in values overridden by `EDUZZ_MAX_ATTEMPTS`,
    /// `EDUZZ_RETRY_BASE_DELAY_MS` and `EDUZZ_RETRY_MAX_JITTER_MS`
    fn default() -> Self {
        let builtin = Self::new();
        Self {
            max_attempts: get_env_or_none::<u32>("EDUZZ_MAX_ATTEMPTS")
                .unwrap_or(builtin.max_attempts)
                .max(1),
            base_delay_ms: get_env_or_none("EDUZZ_RETRY_BASE_DELAY_MS")
                .unwrap_or(builtin.base_delay_ms),
            max_jitter_ms: get_env_or_none("EDUZZ_RETRY_MAX_JITTER_MS")
                .unwrap_or(builtin.max_jitter_ms),
            max_delay_secs: builtin.max_delay_secs,
        }
    }
}

/// Why an attempt failed
#[derive(Debug)]
pub enum Failure {
    /// The upstream answered with a non-success status
    Status {
        /// Status received
        status: StatusCode,
        /// Body received, possibly empty
        body: String,
    },
    /// The request never produced a response
    Transport(reqwest::Error),
}

/// Outcome of [`RetryPolicy::classify`]
#[derive(Debug)]
pub enum RetryDecision {
    /// Sleep this long, then try again
    Retry(Duration),
    /// Give up with this error
    Fail(AppError),
}

/// The single retry table applied by every call site
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Creates a policy from its configuration
    #[must_use]
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Decides what to do after `attempt` (1-based) failed with `failure`
    pub fn classify(&self, attempt: u32, failure: Failure) -> RetryDecision {
        let max_attempts = self.config.max_attempts.max(1);
        match failure {
            Failure::Status { status, .. } if status == StatusCode::TOO_MANY_REQUESTS => {
                if attempt >= max_attempts {
                    RetryDecision::Fail(AppError::RateLimitExceeded { attempts: attempt })
                } else {
                    RetryDecision::Retry(self.rate_limit_delay(attempt))
                }
            }
            Failure::Status { status, .. } if is_transient_server_error(status) => {
                if attempt >= max_attempts {
                    RetryDecision::Fail(AppError::UpstreamServer {
                        status,
                        attempts: attempt,
                    })
                } else {
                    RetryDecision::Retry(self.server_error_delay(attempt))
                }
            }
            Failure::Status { status, body } => {
                RetryDecision::Fail(AppError::Transport(TransportError::Status { status, body }))
            }
            Failure::Transport(e) => RetryDecision::Fail(AppError::Transport(e.into())),
        }
    }

    /// Exponential delay without jitter: `base * 2^(attempt-1)`, capped
    #[must_use]
    pub fn exponential_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32
            .checked_shl(attempt.saturating_sub(1))
            .unwrap_or(u32::MAX);
        self.cap(self.config.base_delay().saturating_mul(factor))
    }

    /// Linear delay: `base * attempt`, capped
    #[must_use]
    pub fn server_error_delay(&self, attempt: u32) -> Duration {
        self.cap(self.config.base_delay().saturating_mul(attempt.max(1)))
    }

    /// Exponential delay plus uniform jitter in `[0, max_jitter)`, capped
    #[must_use]
    pub fn rate_limit_delay(&self, attempt: u32) -> Duration {
        let jitter = if self.config.max_jitter_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::rng().random_range(0..self.config.max_jitter_ms))
        };
        self.cap(self.exponential_delay(attempt).saturating_add(jitter))
    }

    fn cap(&self, delay: Duration) -> Duration {
        delay.min(self.config.max_delay())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

/// Statuses absorbed with linear backoff
#[must_use]
pub fn is_transient_server_error(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}
