use crate::error::AppError;
use crate::model::requests::TaxDocumentListRequest;
use crate::presentation::fiscal::TaxDocument;
use async_trait::async_trait;

/// Interface for the fiscal service
#[async_trait]
pub trait FiscalService: Send + Sync {
    /// Gets one tax document
    async fn get_tax_document(&self, document_id: i64) -> Result<TaxDocument, AppError>;

    /// Gets every tax document matching the filters, walking all pages
    async fn get_tax_document_list(
        &self,
        request: &TaxDocumentListRequest,
    ) -> Result<Vec<TaxDocument>, AppError>;
}
