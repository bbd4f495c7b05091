//! Post-decode sanity checks
//!
//! Every response shape implements [`Validate`]; the HTTP pipeline calls it
//! right after decoding, so a payload that decodes but makes no sense never
//! reaches the caller. Validation failures are not transient and are never
//! retried.

use std::fmt;
use thiserror::Error;

/// A payload that decoded but failed a sanity rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {shape} response: {reason}")]
pub struct ValidationError {
    /// Response shape the rule belongs to, e.g. `financial statement`
    pub shape: &'static str,
    /// Rule that failed
    pub reason: String,
}

impl ValidationError {
    /// Creates a new validation error
    pub fn new(shape: &'static str, reason: impl fmt::Display) -> Self {
        Self {
            shape,
            reason: reason.to_string(),
        }
    }
}

/// Capability implemented by every decoded response shape
pub trait Validate {
    /// Checks the decoded value, failing with the first broken rule
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Fails with `reason` when `condition` does not hold
pub(crate) fn ensure(
    condition: bool,
    shape: &'static str,
    reason: impl fmt::Display,
) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::new(shape, reason))
    }
}
