/// Base URL of the Eduzz REST API
pub const DEFAULT_BASE_URL: &str = "https://api2.eduzz.com";
/// User agent string used in HTTP requests to identify this client to the Eduzz API
pub const USER_AGENT: &str = "eduzz-client/0.1.0";
/// Header carrying the session token on authenticated requests
pub const TOKEN_HEADER: &str = "token";
/// Response header with the number of calls left in the current rate-limit window
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
/// Default page size for paginated endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Calls assumed available in a fresh rate-limit window
pub const DEFAULT_RATE_LIMIT_CALLS: u32 = 30;
/// Length of the upstream rate-limit window in seconds
pub const DEFAULT_RATE_LIMIT_WINDOW_SECONDS: u64 = 60;
/// Total attempts (first try included) before a retryable failure is surfaced
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Base delay in milliseconds for both backoff strategies
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1200;
/// Upper bound for the random jitter added to rate-limit backoff, in milliseconds
pub const DEFAULT_RETRY_MAX_JITTER_MS: u64 = 1000;
/// Hard cap for any single backoff delay, in seconds
pub const MAX_RETRY_DELAY_SECONDS: u64 = 60;
/// Connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 50;
/// Read timeout in seconds
pub const DEFAULT_READ_TIMEOUT_SECONDS: u64 = 50;
/// Seconds an idle pooled connection is kept open
pub const DEFAULT_POOL_IDLE_TIMEOUT_SECONDS: u64 = 120;
/// Idle connections kept per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 20;
