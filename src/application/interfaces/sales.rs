use crate::error::AppError;
use crate::model::requests::SalesListRequest;
use crate::presentation::sale::{Invoice, LastDaysAmount};
use async_trait::async_trait;

/// Interface for the sales service
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Gets every sale matching the filters, walking all pages
    ///
    /// # Arguments
    /// * `request` - Date range and optional filters
    ///
    /// # Returns
    /// * All invoices, in the order the upstream returned them
    async fn get_sales_list(&self, request: &SalesListRequest) -> Result<Vec<Invoice>, AppError>;

    /// Gets a single sale
    ///
    /// # Returns
    /// * `Err(AppError::NotFound)` when the upstream returns no record
    async fn get_sale(&self, sale_id: i64) -> Result<Invoice, AppError>;

    /// Gets the daily totals of the last `days` days, upstream default when `None`
    async fn get_last_days_amount(
        &self,
        days: Option<u32>,
    ) -> Result<Vec<LastDaysAmount>, AppError>;
}
