/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Authentication payloads
pub mod auth;
/// HTTP request utilities with rate limiting and retry
pub mod http;
/// Query models for list endpoints
pub mod requests;
/// Response envelopes and their validation rules
pub mod responses;
/// Retry configuration and policy for HTTP requests
pub mod retry;
/// Post-decode sanity checks
pub mod validation;
