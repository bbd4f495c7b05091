use eduzz_client::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};
use eduzz_client::model::retry::RetryConfig;
use std::env;
use std::time::Duration;

fn credentials() -> Credentials {
    Credentials::new("me@example.com", "public-key-value", "api-key-value")
}

#[test]
fn test_with_credentials_uses_builtin_defaults() {
    let config = Config::with_credentials(credentials());
    assert_eq!(config.rest_api.base_url, "https://api2.eduzz.com");
    assert_eq!(config.rest_api.page_size, 100);
    assert_eq!(config.rest_api.connect_timeout(), Duration::from_secs(50));
    assert_eq!(config.rest_api.read_timeout(), Duration::from_secs(50));
    assert_eq!(config.rest_api.pool_idle_timeout(), Duration::from_secs(120));
    assert_eq!(config.rest_api.pool_max_idle_per_host, 20);
    assert_eq!(config.rest_api.deadline(), None);
    assert_eq!(config.rate_limiter.max_calls, 30);
    assert_eq!(config.rate_limiter.window_seconds, 60);
    assert_eq!(config.retry, RetryConfig::new());
}

#[test]
fn test_builders() {
    let config = Config::with_credentials(credentials())
        .with_base_url("http://127.0.0.1:1234/")
        .with_page_size(0)
        .with_deadline(Duration::from_secs(5))
        .with_rate_limiter(RateLimiterConfig {
            max_calls: 10,
            window_seconds: 1,
        })
        .with_retry(RetryConfig::with_attempts_and_delay(2, 1));

    assert_eq!(config.rest_api.page_size, 1);
    assert_eq!(config.rest_api.deadline(), Some(Duration::from_secs(5)));
    assert_eq!(config.rate_limiter.max_calls, 10);
    assert_eq!(config.retry.max_attempts, 2);
    assert_eq!(
        config.rest_api.url("/sale/get_sale_list"),
        "http://127.0.0.1:1234/sale/get_sale_list"
    );
}

#[test]
fn test_rest_api_url_join() {
    let rest = RestApiConfig::default();
    assert_eq!(rest.url("user/get_me"), "https://api2.eduzz.com/user/get_me");
    assert_eq!(rest.url("/user/get_me"), "https://api2.eduzz.com/user/get_me");
}

#[test]
fn test_credentials_are_redacted_when_printed() {
    let config = Config::with_credentials(credentials());
    let printed = format!("{config} {config:?}");
    assert!(printed.contains("me@example.com"));
    assert!(!printed.contains("public-key-value"));
    assert!(!printed.contains("api-key-value"));

    let json = serde_json::to_value(&config.credentials).unwrap();
    assert_eq!(json["public_key"], "***");
    assert_eq!(json["api_key"], "***");
}

#[test]
fn test_credentials_completeness() {
    assert!(credentials().is_complete());
    assert!(!Credentials::new("me@example.com", "", "key").is_complete());
}

#[test]
fn test_config_new_reads_environment() {
    unsafe {
        env::set_var("EDUZZ_LOGIN", "env@example.com");
        env::set_var("EDUZZ_PAGE_SIZE", "25");
        env::set_var("EDUZZ_RATE_LIMIT_CALLS", "12");
        env::set_var("EDUZZ_DEADLINE_SECS", "9");
        env::set_var("EDUZZ_POOL_MAX_IDLE_PER_HOST", "4");
    }

    let config = Config::new();
    assert_eq!(config.credentials.email, "env@example.com");
    assert_eq!(config.rest_api.page_size, 25);
    assert_eq!(config.rate_limiter.max_calls, 12);
    assert_eq!(config.rest_api.deadline(), Some(Duration::from_secs(9)));
    assert_eq!(config.rest_api.pool_max_idle_per_host, 4);
    assert_eq!(config.rest_api.pool_idle_timeout(), Duration::from_secs(120));

    unsafe {
        env::remove_var("EDUZZ_LOGIN");
        env::remove_var("EDUZZ_PAGE_SIZE");
        env::remove_var("EDUZZ_RATE_LIMIT_CALLS");
        env::remove_var("EDUZZ_DEADLINE_SECS");
        env::remove_var("EDUZZ_POOL_MAX_IDLE_PER_HOST");
    }
}
