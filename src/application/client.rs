/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authenticated HTTP pipeline shared by every typed operation
//!
//! One logical call runs as: authenticate (lazily) → rate limit → send →
//! header feedback → retry policy → decode → validate, repeated per page for
//! paginated endpoints. The whole call is optionally bounded by a deadline.

use crate::application::auth::AuthManager;
use crate::application::config::Config;
use crate::application::pagination::PaginatedFetcher;
use crate::application::rate_limiter::{RateLimitState, RateLimiter};
use crate::constants::{TOKEN_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::http::{HttpRequest, make_http_request, parse_response};
use crate::model::responses::Page;
use crate::model::retry::RetryPolicy;
use crate::model::validation::Validate;
use crate::utils::id::get_id;
use reqwest::Client as HttpInternalClient;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Instrument, debug, info_span};

/// Authenticated, rate-limited, retrying HTTP client
///
/// Cloning is cheap: clones share the connection pool, the session token and
/// the rate-limit state.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: Arc<Config>,
    http_client: HttpInternalClient,
    auth: Arc<AuthManager>,
    rate_limiter: Arc<RateLimiter>,
    policy: RetryPolicy,
    deadline: Option<Duration>,
}

impl HttpClient {
    /// Creates a client with its own connection pool
    ///
    /// # Returns
    /// * `Err(AppError::Config)` - If the underlying transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.rest_api.connect_timeout())
            .read_timeout(config.rest_api.read_timeout())
            .pool_idle_timeout(config.rest_api.pool_idle_timeout())
            .pool_max_idle_per_host(config.rest_api.pool_max_idle_per_host)
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Creates a client over a caller-supplied `reqwest::Client`
    pub fn with_http_client(config: Config, http_client: HttpInternalClient) -> Self {
        let policy = RetryPolicy::new(config.retry.clone());
        let rate_limiter = Arc::new(RateLimiter::new(&config.rate_limiter));
        let auth = Arc::new(AuthManager::new(
            config.credentials.clone(),
            &config.rest_api,
            http_client.clone(),
            rate_limiter.clone(),
            policy.clone(),
        ));
        let deadline = config.rest_api.deadline();

        Self {
            config: Arc::new(config),
            http_client,
            auth,
            rate_limiter,
            policy,
            deadline,
        }
    }

    /// Returns a handle whose calls are each bounded by `deadline`
    #[must_use]
    pub fn with_deadline(&self, deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Deadline applied to each call, if any
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the authentication manager
    #[must_use]
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Current rate-limit window
    pub async fn rate_limit_state(&self) -> RateLimitState {
        self.rate_limiter.state().await
    }

    /// Obtains the session token now instead of on the first call
    pub async fn authenticate(&self) -> Result<(), AppError> {
        self.bounded("authenticate", async {
            self.auth.ensure_authenticated().await.map(|_| ())
        })
        .await
    }

    /// GET a single, non-paginated response and validate it
    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate + Send,
    {
        self.bounded(path, self.get_once(path, query)).await
    }

    /// GET every page of a list endpoint and return all records
    ///
    /// Each page carries `page` and `per_page` on top of `query` and is
    /// validated before its records are kept.
    pub async fn get_all<T>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>, AppError>
    where
        T: Send,
        Page<T>: DeserializeOwned + Validate,
    {
        let per_page = self.config.rest_api.page_size.to_string();
        self.bounded(
            path,
            PaginatedFetcher::fetch_all(|page| {
                let mut page_query: Vec<(&str, String)> = query.to_vec();
                page_query.push(("page", page.to_string()));
                page_query.push(("per_page", per_page.clone()));
                async move { self.get_once::<Page<T>>(path, &page_query).await }
            }),
        )
        .await
    }

    async fn get_once<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let token = self.auth.ensure_authenticated().await?;
        let url = self.config.rest_api.url(path);
        let request = HttpRequest::get(&url, query).header(TOKEN_HEADER, &token);

        let response =
            make_http_request(&self.http_client, &self.rate_limiter, &self.policy, &request)
                .await?;
        let value: T = parse_response(response).await?;
        value.validate()?;
        Ok(value)
    }

    /// Runs one logical call inside a span, bounded by the deadline if set
    async fn bounded<T, F>(&self, operation: &str, call: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        let span = info_span!("eduzz_call", call_id = %get_id(), operation = %operation);
        async {
            debug!("Call started");
            match self.deadline {
                Some(deadline) => tokio::time::timeout(deadline, call)
                    .await
                    .map_err(|_| AppError::DeadlineExceeded(deadline))?,
                None => call.await,
            }
        }
        .instrument(span)
        .await
    }
}
