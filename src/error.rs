/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types returned by the client
//!
//! Every public operation resolves to either a validated value or exactly one
//! [`AppError`]. Retryable upstream conditions (429 and 5xx) only show up here
//! once the retry budget is spent.

use crate::model::validation::ValidationError;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of the underlying HTTP exchange that is never retried
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, timeout, TLS failure or any other send error
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The upstream answered with a status the retry policy does not absorb
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status returned by the upstream
        status: StatusCode,
        /// Response body, possibly empty
        body: String,
    },
}

impl TransportError {
    /// Returns the HTTP status when the failure came from a response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Request(e) => e.status(),
            TransportError::Status { status, .. } => Some(*status),
        }
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Credentials were rejected or the token was missing from the reply
    #[error("authentication failed: {0}")]
    Auth(String),
    /// The upstream kept answering 429 until the attempt cap was reached
    #[error("rate limit exceeded after {attempts} attempts")]
    RateLimitExceeded {
        /// Attempts performed, first try included
        attempts: u32,
    },
    /// The upstream kept answering 5xx until the attempt cap was reached
    #[error("upstream server error {status} after {attempts} attempts")]
    UpstreamServer {
        /// Last status received
        status: StatusCode,
        /// Attempts performed, first try included
        attempts: u32,
    },
    /// Connection, timeout or non-retryable status
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    /// A decoded payload failed its sanity checks
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    /// The caller deadline fired before the call completed
    #[error("deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
    /// The body could not be decoded into the expected shape
    #[error("deserialization error: {0}")]
    Deserialization(String),
    /// A single-record fetch returned no record
    #[error("not found: {0}")]
    NotFound(String),
    /// The client could not be configured
    #[error("configuration error: {0}")]
    Config(String),
    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(TransportError::Request(e))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Deserialization(e.to_string())
    }
}

impl AppError {
    /// Returns `true` for errors that the retry policy absorbs before surfacing them
    #[must_use]
    pub fn is_retry_exhaustion(&self) -> bool {
        matches!(
            self,
            AppError::RateLimitExceeded { .. } | AppError::UpstreamServer { .. }
        )
    }
}
