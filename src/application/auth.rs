/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authentication module for the Eduzz API
//!
//! The account credentials are exchanged once for a session token through
//! `POST /credential/generate_token`. The token is requested lazily by the
//! first call that needs it and then kept for the lifetime of the client.
//! Concurrent first callers share a single login request and its outcome:
//! when it fails, every caller that queued behind it gets that failure
//! instead of sending a login of its own.

use crate::application::config::{Credentials, RestApiConfig};
use crate::application::rate_limiter::RateLimiter;
use crate::error::{AppError, TransportError};
use crate::model::auth::AuthResponse;
use crate::model::http::{HttpRequest, make_http_request, parse_response};
use crate::model::retry::RetryPolicy;
use crate::model::validation::Validate;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

/// Path of the token endpoint
pub const AUTH_PATH: &str = "credential/generate_token";

/// Authentication manager for the Eduzz API
///
/// Owns the session token. Readers share the token through a read lock; the
/// login gate makes sure only one login request is in flight, and callers
/// queued on the gate reuse whatever the winner produced, token or failure.
pub struct AuthManager {
    credentials: Credentials,
    url: String,
    client: Client,
    rate_limiter: Arc<RateLimiter>,
    policy: RetryPolicy,
    token: RwLock<Option<String>>,
    /// Reason the most recent login failed, `None` after a success
    login_gate: Mutex<Option<String>>,
    /// Login attempts that ran to completion, success or failure
    finished_logins: AtomicU64,
    logins: AtomicU64,
}

impl AuthManager {
    /// Creates a new, unauthenticated manager
    ///
    /// # Arguments
    /// * `credentials` - Account credentials
    /// * `rest_api` - REST configuration, used to build the token URL
    /// * `client` - HTTP client shared with the rest of the pipeline
    /// * `rate_limiter` - Rate limiter shared with the rest of the pipeline
    /// * `policy` - Retry policy applied to the login request
    pub fn new(
        credentials: Credentials,
        rest_api: &RestApiConfig,
        client: Client,
        rate_limiter: Arc<RateLimiter>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            credentials,
            url: rest_api.url(AUTH_PATH),
            client,
            rate_limiter,
            policy,
            token: RwLock::new(None),
            login_gate: Mutex::new(None),
            finished_logins: AtomicU64::new(0),
            logins: AtomicU64::new(0),
        }
    }

    /// Returns the session token, logging in first when there is none
    ///
    /// # Returns
    /// * `Ok(String)` - Non-empty session token
    /// * `Err(AppError)` - `Auth` when credentials are rejected or the reply
    ///   carries no token, or whatever the retry policy surfaced. Callers that
    ///   waited on another caller's failed login get `Auth` with its reason.
    pub async fn ensure_authenticated(&self) -> Result<String, AppError> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }

        let observed = self.finished_logins.load(Ordering::Acquire);
        let mut last_failure = self.login_gate.lock().await;

        // Another caller may have logged in while this one queued on the gate
        if let Some(token) = self.token.read().await.as_ref() {
            debug!("Reusing token obtained by a concurrent login");
            return Ok(token.clone());
        }

        // A login finished while this caller queued and it failed
        if self.finished_logins.load(Ordering::Acquire) != observed {
            if let Some(reason) = last_failure.as_ref() {
                debug!("Sharing the failure of a concurrent login: {}", reason);
                return Err(AppError::Auth(reason.clone()));
            }
        }

        info!("No active session, logging in");
        let outcome = self.login().await;
        self.finished_logins.fetch_add(1, Ordering::AcqRel);
        match outcome {
            Ok(token) => {
                *last_failure = None;
                *self.token.write().await = Some(token.clone());
                info!("✓ Login successful");
                debug!("Session opened for {}", self.credentials.email);
                Ok(token)
            }
            Err(e) => {
                *last_failure = Some(match &e {
                    AppError::Auth(reason) => reason.clone(),
                    other => other.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Drops the stored token so that the next call logs in again
    pub async fn invalidate(&self) {
        let mut token = self.token.write().await;
        if token.take().is_some() {
            debug!("Session token invalidated");
        }
    }

    /// `true` once a token is stored
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Number of login requests that reached the network
    #[must_use]
    pub fn login_count(&self) -> u64 {
        self.logins.load(Ordering::Relaxed)
    }

    async fn login(&self) -> Result<String, AppError> {
        if !self.credentials.is_complete() {
            error!("Login attempted with incomplete credentials");
            return Err(AppError::Auth("incomplete credentials".to_string()));
        }

        let form = [
            ("email", self.credentials.email.as_str()),
            ("publickey", self.credentials.public_key.as_str()),
            ("apikey", self.credentials.api_key.as_str()),
        ];
        let request = HttpRequest::post_form(&self.url, &form);

        debug!("Sending login request to: {}", self.url);
        self.logins.fetch_add(1, Ordering::Relaxed);

        let response = make_http_request(&self.client, &self.rate_limiter, &self.policy, &request)
            .await
            .map_err(into_auth_error)?;

        let reply: AuthResponse = parse_response(response).await?;
        reply.validate().map_err(|e| {
            error!("Authentication reply rejected: {}", e);
            AppError::Auth(e.reason)
        })?;
        reply
            .token()
            .map(str::to_string)
            .ok_or_else(|| AppError::Auth("missing token".to_string()))
    }
}

/// Rejections by the token endpoint are credential problems, not transport ones
fn into_auth_error(e: AppError) -> AppError {
    match e {
        AppError::Transport(TransportError::Status { status, body })
            if matches!(
                status,
                StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
            ) =>
        {
            AppError::Auth(format!("credentials rejected with {status}: {body}"))
        }
        other => other,
    }
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("email", &self.credentials.email)
            .field("url", &self.url)
            .field("logins", &self.login_count())
            .finish_non_exhaustive()
    }
}
