//! Aggregation of multi-page list endpoints

use crate::error::AppError;
use crate::model::responses::Page;
use std::future::Future;
use tracing::debug;

/// Walks a paginated endpoint from page 1 until it is exhausted
///
/// Records are appended in response order. The walk stops when a page has no
/// paginator (or an empty one) or when the next page number goes past
/// `totalPages`. A failing page aborts the whole walk and the records
/// gathered so far are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginatedFetcher;

impl PaginatedFetcher {
    /// Fetches every page through `fetch_page` and returns all records
    ///
    /// # Arguments
    /// * `fetch_page` - Requests one page, numbered from 1
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Every record of every page
    /// * `Err(AppError)` - The first page error
    pub async fn fetch_all<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, AppError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<Page<T>, AppError>>,
    {
        let mut records = Vec::new();
        let mut page: u32 = 1;

        loop {
            let current = fetch_page(page).await?;
            let next = page.saturating_add(1);
            let last = current.is_last(next);
            debug!("Page {} returned {} records", page, current.data.len());
            records.extend(current.data);
            if last {
                break;
            }
            page = next;
        }

        debug!("Pagination finished after {} pages, {} records", page, records.len());
        Ok(records)
    }
}
