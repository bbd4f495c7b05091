/// Authentication module for the Eduzz API
pub mod auth;
/// Authenticated HTTP pipeline
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the façade
pub mod interfaces;
/// Aggregation of paginated endpoints
pub mod pagination;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
