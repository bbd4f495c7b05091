/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::model::retry::{Failure, RetryDecision, RetryPolicy};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// Everything needed to (re)build one outgoing request
#[derive(Debug, Clone)]
pub struct HttpRequest<'a> {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: &'a str,
    /// Extra headers as `(name, value)` pairs
    pub headers: Vec<(&'a str, &'a str)>,
    /// Query string pairs
    pub query: &'a [(&'a str, String)],
    /// Form fields, sent url-encoded when present
    pub form: Option<&'a [(&'a str, &'a str)]>,
}

impl<'a> HttpRequest<'a> {
    /// A bodiless GET
    #[must_use]
    pub fn get(url: &'a str, query: &'a [(&'a str, String)]) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: Vec::new(),
            query,
            form: None,
        }
    }

    /// A form-encoded POST
    #[must_use]
    pub fn post_form(url: &'a str, form: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            method: Method::POST,
            url,
            headers: Vec::new(),
            query: &[],
            form: Some(form),
        }
    }

    /// Adds a header
    #[must_use]
    pub fn header(mut self, name: &'a str, value: &'a str) -> Self {
        self.headers.push((name, value));
        self
    }
}

/// Makes an HTTP request with rate limiting and the canonical retry policy
///
/// Every attempt first waits on the rate limiter, then feeds the response
/// headers back into it. Failed attempts are handed to
/// [`RetryPolicy::classify`], which either sleeps and tries again or ends the
/// call with a typed error.
///
/// # Returns
///
/// * `Ok(Response)` - First 2xx response
/// * `Err(AppError)` - `RateLimitExceeded`, `UpstreamServer` or `Transport`
///
/// # Example
///
/// ```ignore
/// use eduzz_client::model::http::{make_http_request, HttpRequest};
///
/// let query = vec![("page", "1".to_string())];
/// let request = HttpRequest::get("https://api2.eduzz.com/user/get_me", &query)
///     .header("token", &token);
/// let response = make_http_request(&client, &rate_limiter, &policy, &request).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    policy: &RetryPolicy,
    request: &HttpRequest<'_>,
) -> Result<Response, AppError> {
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        rate_limiter.acquire().await;

        debug!("{} {} (attempt {})", request.method, request.url, attempt);

        let mut builder = client.request(request.method.clone(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }
        if !request.query.is_empty() {
            builder = builder.query(request.query);
        }
        if let Some(form) = request.form {
            builder = builder.form(form);
        }

        let failure = match builder.send().await {
            Ok(response) => {
                rate_limiter.update_from_headers(response.headers()).await;
                let status = response.status();
                debug!("Response status: {}", status);
                if status.is_success() {
                    return Ok(response);
                }
                let body = response.text().await.unwrap_or_default();
                Failure::Status { status, body }
            }
            Err(e) => Failure::Transport(e),
        };

        match policy.classify(attempt, failure) {
            RetryDecision::Retry(delay) => {
                warn!(
                    "{} {} failed on attempt {}, retrying in {} ms",
                    request.method,
                    request.url,
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            RetryDecision::Fail(e) => {
                error!("{} {} failed: {}", request.method, request.url, e);
                return Err(e);
            }
        }
    }
}

/// Reads the whole body and decodes it as `T`
///
/// Decoding failures surface as [`AppError::Deserialization`], never as
/// transport errors.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        error!("Failed to decode response body: {}", e);
        AppError::from(e)
    })
}
