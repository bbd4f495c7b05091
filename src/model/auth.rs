/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::validation::{Validate, ValidationError, ensure};
use crate::presentation::serialization::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Timing block attached by the upstream to every response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Request start, upstream clock
    #[serde(default)]
    pub start: Option<f64>,
    /// Request end, upstream clock
    #[serde(default)]
    pub finish: Option<f64>,
    /// Processing time
    #[serde(default)]
    pub process: Option<f64>,
    /// Token echoed back by the authentication endpoint
    #[serde(default)]
    pub token: Option<String>,
    /// Validity announced for the token
    #[serde(default, with = "timestamp::option")]
    pub token_valid_until: Option<DateTime<Utc>>,
}

/// Reply of `POST /credential/generate_token`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    /// Upstream success flag
    pub success: bool,
    /// Payload holding the `token` entry
    #[serde(default)]
    pub data: Option<HashMap<String, Option<String>>>,
    /// Timing block
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl AuthResponse {
    /// Returns the session token when present and non-empty
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.get("token"))
            .and_then(|token| token.as_deref())
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

impl Validate for AuthResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure(self.token().is_some(), "auth", "missing token")
    }
}
