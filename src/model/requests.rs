/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::calendar_date;
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Query string as `(name, value)` pairs
pub type Query = Vec<(&'static str, String)>;

/// Pushes `name=value` only when the value is set
fn push_opt<T: ToString>(query: &mut Query, name: &'static str, value: Option<&T>) {
    if let Some(v) = value {
        let v = v.to_string();
        if !v.trim().is_empty() {
            query.push((name, v));
        }
    }
}

/// Pushes a calendar date formatted as `yyyy-MM-dd`
fn push_date(query: &mut Query, name: &'static str, value: Option<&NaiveDate>) {
    if let Some(date) = value {
        query.push((name, calendar_date::format(date)));
    }
}

/// Filters for `/sale/get_sale_list`
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesListRequest {
    /// First day of the range
    pub start_date: Option<NaiveDate>,
    /// Last day of the range
    pub end_date: Option<NaiveDate>,
    /// Subscription contract
    pub contract_id: Option<i64>,
    /// Affiliate
    pub affiliate_id: Option<i64>,
    /// Product
    pub content_id: Option<i64>,
    /// Numeric invoice status
    pub invoice_status: Option<i32>,
    /// Client email
    pub client_email: Option<String>,
    /// Client document
    pub client_document: Option<String>,
    /// Which date the range applies to, e.g. `payment` or `creation`
    pub date_type: Option<String>,
}

impl SalesListRequest {
    /// Creates a request for the given date range with no other filter
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Self::default()
        }
    }

    /// Restricts the list to one contract
    #[must_use]
    pub fn with_contract(mut self, contract_id: i64) -> Self {
        self.contract_id = Some(contract_id);
        self
    }

    /// Restricts the list to one affiliate
    #[must_use]
    pub fn with_affiliate(mut self, affiliate_id: i64) -> Self {
        self.affiliate_id = Some(affiliate_id);
        self
    }

    /// Restricts the list to one product
    #[must_use]
    pub fn with_content(mut self, content_id: i64) -> Self {
        self.content_id = Some(content_id);
        self
    }

    /// Restricts the list to one invoice status
    #[must_use]
    pub fn with_invoice_status(mut self, status: i32) -> Self {
        self.invoice_status = Some(status);
        self
    }

    /// Restricts the list to one client email
    #[must_use]
    pub fn with_client_email(mut self, email: impl Into<String>) -> Self {
        self.client_email = Some(email.into());
        self
    }

    /// Restricts the list to one client document
    #[must_use]
    pub fn with_client_document(mut self, document: impl Into<String>) -> Self {
        self.client_document = Some(document.into());
        self
    }

    /// Chooses which date the range applies to
    #[must_use]
    pub fn with_date_type(mut self, date_type: impl Into<String>) -> Self {
        self.date_type = Some(date_type.into());
        self
    }

    /// Query parameters, unset filters omitted
    #[must_use]
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        push_date(&mut query, "start_date", self.start_date.as_ref());
        push_date(&mut query, "end_date", self.end_date.as_ref());
        push_opt(&mut query, "contract_id", self.contract_id.as_ref());
        push_opt(&mut query, "affiliate_id", self.affiliate_id.as_ref());
        push_opt(&mut query, "content_id", self.content_id.as_ref());
        push_opt(&mut query, "invoice_status", self.invoice_status.as_ref());
        push_opt(&mut query, "client_email", self.client_email.as_ref());
        push_opt(&mut query, "client_document", self.client_document.as_ref());
        push_opt(&mut query, "date_type", self.date_type.as_ref());
        query
    }
}

/// Filters for `/fiscal/get_taxdocumentlist`
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxDocumentListRequest {
    /// First day of the range
    pub start_date: Option<NaiveDate>,
    /// Last day of the range
    pub end_date: Option<NaiveDate>,
    /// Document status
    pub document_status: Option<String>,
    /// Client name
    pub name: Option<String>,
    /// Client email
    pub email: Option<String>,
    /// Related sale
    pub sale_id: Option<i64>,
}

impl TaxDocumentListRequest {
    /// Creates a request with no filter at all
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the list to a date range
    #[must_use]
    pub fn with_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    /// Restricts the list to one document status
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.document_status = Some(status.into());
        self
    }

    /// Restricts the list to one client name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restricts the list to one client email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Restricts the list to one sale
    #[must_use]
    pub fn with_sale(mut self, sale_id: i64) -> Self {
        self.sale_id = Some(sale_id);
        self
    }

    /// Query parameters, unset filters omitted
    #[must_use]
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        push_date(&mut query, "start_date", self.start_date.as_ref());
        push_date(&mut query, "end_date", self.end_date.as_ref());
        push_opt(&mut query, "document_status", self.document_status.as_ref());
        push_opt(&mut query, "name", self.name.as_ref());
        push_opt(&mut query, "email", self.email.as_ref());
        push_opt(&mut query, "sale_id", self.sale_id.as_ref());
        query
    }
}

/// Query for `/financial/statement`
#[must_use]
pub fn financial_statement_query(start_date: NaiveDate, end_date: NaiveDate) -> Query {
    vec![
        ("start_date", calendar_date::format(&start_date)),
        ("end_date", calendar_date::format(&end_date)),
    ]
}

/// Query for `/sale/last_days_amount`
#[must_use]
pub fn last_days_amount_query(days: Option<u32>) -> Query {
    let mut query = Query::new();
    push_opt(&mut query, "days", days.as_ref());
    query
}
