use crate::error::AppError;
use crate::presentation::financial::FinancialStatement;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Interface for the financial service
#[async_trait]
pub trait FinancialService: Send + Sync {
    /// Gets every statement entry between two days, walking all pages
    async fn get_financial_statement(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<FinancialStatement>, AppError>;
}
