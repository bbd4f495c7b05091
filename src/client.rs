/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Typed client for the Eduzz API
//!
//! This module provides a clean, easy-to-use client that handles:
//! - Lazy authentication and token reuse
//! - Pacing from the upstream rate-limit headers
//! - Retries of throttled and transient server failures
//! - Aggregation of paginated lists and response validation
//!
//! # Example
//! ```ignore
//! use eduzz_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//!
//! // Authentication is handled automatically
//! let me = client.get_own_user_info().await?;
//! ```

use crate::application::client::HttpClient;
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::financial::FinancialService;
use crate::application::interfaces::fiscal::FiscalService;
use crate::application::interfaces::sales::SalesService;
use crate::application::rate_limiter::RateLimitState;
use crate::error::AppError;
use crate::model::requests::{
    SalesListRequest, TaxDocumentListRequest, financial_statement_query, last_days_amount_query,
};
use crate::model::responses::{
    InvoiceResponse, LastDaysAmountResponse, TaxDocumentResponse, UserInfoResponse,
};
use crate::presentation::financial::FinancialStatement;
use crate::presentation::fiscal::TaxDocument;
use crate::presentation::sale::{Invoice, LastDaysAmount};
use crate::presentation::user::UserInfo;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client as HttpInternalClient;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the Eduzz API
///
/// Every operation returns either a fully validated value or exactly one
/// [`AppError`]. Clones share the session and the rate-limit window.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    /// Creates a client with its own connection pool. Nothing is sent until
    /// the first call.
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Creates a client over an existing `reqwest::Client`
    pub fn with_http_client(config: Config, http_client: HttpInternalClient) -> Self {
        Self {
            http_client: HttpClient::with_http_client(config, http_client),
        }
    }

    /// Returns a handle sharing this client's session whose calls each fail
    /// with [`AppError::DeadlineExceeded`] once `deadline` has elapsed
    #[must_use]
    pub fn with_deadline(&self, deadline: Duration) -> Self {
        Self {
            http_client: self.http_client.with_deadline(deadline),
        }
    }

    /// Underlying HTTP pipeline
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Current rate-limit window
    pub async fn rate_limit_state(&self) -> RateLimitState {
        self.http_client.rate_limit_state().await
    }

    /// `true` once a session token is held
    pub async fn is_authenticated(&self) -> bool {
        self.http_client.auth().is_authenticated().await
    }
}

#[async_trait]
impl AccountService for Client {
    async fn authenticate(&self) -> Result<(), AppError> {
        self.http_client.authenticate().await
    }

    async fn get_own_user_info(&self) -> Result<Vec<UserInfo>, AppError> {
        info!("Getting own user information");
        let response: UserInfoResponse = self.http_client.get("user/get_me", &[]).await?;
        debug!("User information obtained: {} records", response.data.len());
        Ok(response.data)
    }
}

#[async_trait]
impl SalesService for Client {
    async fn get_sales_list(&self, request: &SalesListRequest) -> Result<Vec<Invoice>, AppError> {
        info!("Getting sales list");
        let sales = self
            .http_client
            .get_all::<Invoice>("sale/get_sale_list", &request.to_query())
            .await?;
        info!("Sales list obtained: {} invoices", sales.len());
        Ok(sales)
    }

    async fn get_sale(&self, sale_id: i64) -> Result<Invoice, AppError> {
        if sale_id <= 0 {
            return Err(AppError::InvalidInput(format!("invalid sale id {sale_id}")));
        }
        let path = format!("sale/get_sale/{sale_id}");
        info!("Getting sale: {}", sale_id);
        let response: InvoiceResponse = self.http_client.get(&path, &[]).await?;
        response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("sale {sale_id}")))
    }

    async fn get_last_days_amount(
        &self,
        days: Option<u32>,
    ) -> Result<Vec<LastDaysAmount>, AppError> {
        info!("Getting last days amount");
        let response: LastDaysAmountResponse = self
            .http_client
            .get("sale/last_days_amount", &last_days_amount_query(days))
            .await?;
        debug!("Last days amount obtained: {} days", response.data.len());
        Ok(response.data)
    }
}

#[async_trait]
impl FinancialService for Client {
    async fn get_financial_statement(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<FinancialStatement>, AppError> {
        if start_date > end_date {
            return Err(AppError::InvalidInput(format!(
                "start date {start_date} is after end date {end_date}"
            )));
        }
        info!("Getting financial statement from {} to {}", start_date, end_date);
        let entries = self
            .http_client
            .get_all::<FinancialStatement>(
                "financial/statement",
                &financial_statement_query(start_date, end_date),
            )
            .await?;
        info!("Financial statement obtained: {} entries", entries.len());
        Ok(entries)
    }
}

#[async_trait]
impl FiscalService for Client {
    async fn get_tax_document(&self, document_id: i64) -> Result<TaxDocument, AppError> {
        if document_id <= 0 {
            return Err(AppError::InvalidInput(format!(
                "invalid document id {document_id}"
            )));
        }
        let path = format!("fiscal/get_taxdocument/{document_id}");
        info!("Getting tax document: {}", document_id);
        let response: TaxDocumentResponse = self.http_client.get(&path, &[]).await?;
        Ok(response.data)
    }

    async fn get_tax_document_list(
        &self,
        request: &TaxDocumentListRequest,
    ) -> Result<Vec<TaxDocument>, AppError> {
        info!("Getting tax document list");
        let documents = self
            .http_client
            .get_all::<TaxDocument>("fiscal/get_taxdocumentlist", &request.to_query())
            .await?;
        info!("Tax document list obtained: {} documents", documents.len());
        Ok(documents)
    }
}
