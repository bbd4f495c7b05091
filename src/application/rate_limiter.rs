/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! The upstream reports how many calls are left in the current window through
//! the `x-ratelimit-remaining` header. The limiter never counts calls itself:
//! it trusts the last header it saw and only holds callers back once the
//! budget is down to its last call.

use crate::application::config::RateLimiterConfig;
use crate::constants::RATE_LIMIT_REMAINING_HEADER;
use reqwest::header::HeaderMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Snapshot of the rate-limit window as last reported by the upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitState {
    /// Calls left in the current window
    pub remaining_calls: u32,
    /// When the current window started
    pub window_start: Instant,
    /// Length of a window
    pub window_size: Duration,
}

impl RateLimitState {
    /// Time left until the current window closes, zero when already closed
    #[must_use]
    pub fn time_to_reset(&self, now: Instant) -> Duration {
        self.window_size
            .saturating_sub(now.saturating_duration_since(self.window_start))
    }
}

/// Rate limiter shared by every call issued through one client
#[derive(Debug)]
pub struct RateLimiter {
    state: Mutex<RateLimitState>,
    default_calls: u32,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// # Example
    ///
    /// ```ignore
    /// use eduzz_client::application::config::RateLimiterConfig;
    /// use eduzz_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig::default());
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            state: Mutex::new(RateLimitState {
                remaining_calls: config.max_calls,
                window_start: Instant::now(),
                window_size: Duration::from_secs(config.window_seconds),
            }),
            default_calls: config.max_calls,
        }
    }

    /// Waits until a request may be sent.
    ///
    /// Returns immediately while more than one call is left. With one call
    /// or less, sleeps until the window closes and then assumes a fresh
    /// budget; the next response header corrects it.
    pub async fn acquire(&self) {
        let wait = {
            let state = self.state.lock().await;
            if state.remaining_calls > 1 {
                return;
            }
            state.time_to_reset(Instant::now())
        };

        if !wait.is_zero() {
            warn!(
                "Rate limit budget exhausted, waiting {} ms for the window to reset",
                wait.as_millis()
            );
            tokio::time::sleep(wait).await;
        }

        let mut state = self.state.lock().await;
        if state.remaining_calls <= 1 {
            state.remaining_calls = self.default_calls;
        }
    }

    /// Records the budget announced by a response.
    ///
    /// Missing or malformed headers leave the state untouched.
    pub async fn update_from_headers(&self, headers: &HeaderMap) {
        let Some(remaining) = parse_remaining(headers) else {
            return;
        };
        let mut state = self.state.lock().await;
        state.remaining_calls = remaining;
        state.window_start = Instant::now();
        debug!("Rate limit remaining calls: {}", remaining);
    }

    /// Current state of the window
    pub async fn state(&self) -> RateLimitState {
        *self.state.lock().await
    }
}

/// Reads the remaining-calls header as an unsigned integer
fn parse_remaining(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(RATE_LIMIT_REMAINING_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()
        .map(|n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
}
