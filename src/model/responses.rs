/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::auth::Profile;
use crate::model::validation::{Validate, ValidationError, ensure};
use crate::presentation::financial::FinancialStatement;
use crate::presentation::fiscal::TaxDocument;
use crate::presentation::sale::{Invoice, LastDaysAmount};
use crate::presentation::user::UserInfo;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Pagination block of list responses
///
/// The upstream sends a loose map; only `totalPages` is relied upon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Paginator(pub HashMap<String, Value>);

impl Paginator {
    /// Total number of pages, when announced.
    ///
    /// Accepts numbers and numeric strings; anything else reads as unknown.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        match self.0.get("totalPages")? {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// `true` when the map carries no entry at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Common envelope of every Eduzz response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    /// Upstream success flag
    pub success: bool,
    /// Payload
    pub data: T,
    /// Timing block
    #[serde(default)]
    pub profile: Option<Profile>,
    /// Pagination block, only on list endpoints
    #[serde(default)]
    pub paginator: Option<Paginator>,
}

/// One page of a list endpoint
pub type Page<T> = Envelope<Vec<T>>;

impl<T> Envelope<Vec<T>> {
    /// Whether aggregation stops before requesting `next_page`.
    ///
    /// A missing or empty paginator ends the walk; otherwise the walk ends
    /// once `next_page` goes past `totalPages`, which defaults to 1.
    #[must_use]
    pub fn is_last(&self, next_page: u32) -> bool {
        match &self.paginator {
            None => true,
            Some(p) if p.is_empty() => true,
            Some(p) => next_page > p.total_pages().unwrap_or(1),
        }
    }
}

/// Reply of `/user/get_me`
pub type UserInfoResponse = Page<UserInfo>;
/// Reply of `/sale/get_sale_list` and `/sale/get_sale/{id}`
pub type InvoiceResponse = Page<Invoice>;
/// Reply of `/sale/last_days_amount`
pub type LastDaysAmountResponse = Page<LastDaysAmount>;
/// Reply of `/financial/statement`
pub type FinancialStatementResponse = Page<FinancialStatement>;
/// Reply of `/fiscal/get_taxdocument/{id}`
pub type TaxDocumentResponse = Envelope<TaxDocument>;
/// Reply of `/fiscal/get_taxdocumentlist`
pub type TaxDocumentListResponse = Page<TaxDocument>;

impl Validate for UserInfoResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        ensure(!self.data.is_empty(), "user", "empty data")
    }
}

impl Validate for InvoiceResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.data.iter().find(|invoice| invoice.sale_id <= 0) {
            Some(invoice) => Err(ValidationError::new(
                "invoice",
                format!("invalid sale_id {}", invoice.sale_id),
            )),
            None => Ok(()),
        }
    }
}

impl Validate for LastDaysAmountResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_not_after(&self.data, Local::now().date_naive())
    }
}

/// Rejects any daily amount dated after `today`
pub(crate) fn validate_not_after(
    amounts: &[LastDaysAmount],
    today: NaiveDate,
) -> Result<(), ValidationError> {
    match amounts.iter().find(|amount| amount.date > today) {
        Some(amount) => Err(ValidationError::new(
            "last days amount",
            format!("future date {}", amount.date),
        )),
        None => Ok(()),
    }
}

impl Validate for FinancialStatementResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.data.iter().find(|entry| entry.statement_value < 0.0) {
            Some(entry) => Err(ValidationError::new(
                "financial statement",
                format!(
                    "negative value {} on statement {}",
                    entry.statement_value, entry.statement_id
                ),
            )),
            None => Ok(()),
        }
    }
}

impl Validate for TaxDocumentResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.data.document_id {
            Some(id) if id > 0 => Ok(()),
            Some(id) => Err(ValidationError::new(
                "tax document",
                format!("invalid document_id {id}"),
            )),
            None => Err(ValidationError::new("tax document", "missing document_id")),
        }
    }
}

impl Validate for TaxDocumentListResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        let invalid = self
            .data
            .iter()
            .filter_map(|doc| doc.document_id)
            .find(|id| *id <= 0);
        match invalid {
            Some(id) => Err(ValidationError::new(
                "tax document list",
                format!("invalid document_id {id}"),
            )),
            None => Ok(()),
        }
    }
}
