/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # eduzz-client
//!
//! An async client for the Eduzz sales platform REST API.
//!
//! The client authenticates lazily with the account credentials, keeps the
//! session token for its whole lifetime, paces calls according to the
//! upstream rate-limit headers, retries transient failures, walks paginated
//! endpoints and validates every decoded payload before handing it back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use eduzz_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!     let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//!     let sales = client.get_sales_list(&SalesListRequest::new(start, end)).await?;
//!     println!("{} sales", sales.len());
//!     Ok(())
//! }
//! ```

/// Application layer: authentication, rate limiting, pagination and the HTTP pipeline
pub mod application;
/// Typed façade over the Eduzz API
pub mod client;
/// Default values and wire constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response, retry and validation models
pub mod model;
/// Convenient re-exports of the most used types
pub mod prelude;
/// Data transfer objects returned by the API
pub mod presentation;
/// Environment, id and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
