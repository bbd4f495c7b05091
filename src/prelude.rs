/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Eduzz Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the library. Importing the prelude brings the client, its configuration, the
//! service traits and every response type into scope.
//!
//! ## Usage
//!
//! ```rust
//! use eduzz_client::prelude::*;
//!
//! let config = Config::with_credentials(Credentials::new("me@example.com", "pub", "key"));
//! let client = Client::new(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Eduzz API client
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Retry configuration and policy
pub use crate::model::retry::{RetryConfig, RetryPolicy};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, TransportError};

/// Validation capability
pub use crate::model::validation::{Validate, ValidationError};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Typed client
pub use crate::client::Client;

/// Service traits implemented by [`Client`]
pub use crate::application::interfaces::{
    account::AccountService, financial::FinancialService, fiscal::FiscalService,
    sales::SalesService,
};

/// Rate-limit window snapshot
pub use crate::application::rate_limiter::RateLimitState;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Query models
pub use crate::model::requests::{SalesListRequest, TaxDocumentListRequest};

/// Response payloads
pub use crate::presentation::{
    FinancialStatement, Invoice, InvoiceItem, LastDaysAmount, Recipient, SaleAffiliateDetail,
    SaleCoopDetail, TaxDocument, TaxDocumentItem, UserInfo,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Date codecs
pub use crate::presentation::serialization::{calendar_date, local_date, timestamp};

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, NaiveDate, Utc};
