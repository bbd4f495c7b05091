use chrono::{Duration, Local};
use eduzz_client::prelude::*;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let config = Config::new();
    info!("Configuration: {}", config);
    let client = Client::new(config)?;

    let me = client.get_own_user_info().await?;
    for user in &me {
        info!("Logged in as {} ({:?})", user.user_id, user.company_name);
    }

    let end = Local::now().date_naive();
    let start = end - Duration::days(30);

    let sales = client
        .get_sales_list(&SalesListRequest::new(start, end).with_date_type("payment"))
        .await?;
    let total: f64 = sales.iter().filter_map(|sale| sale.sale_total).sum();
    info!("{} sales between {} and {}, total {:.2}", sales.len(), start, end, total);

    let statement = client.get_financial_statement(start, end).await?;
    let balance: f64 = statement.iter().map(|entry| entry.statement_value).sum();
    info!("{} statement entries, balance {:.2}", statement.len(), balance);

    let state = client.rate_limit_state().await;
    info!("Calls left in the current window: {}", state.remaining_calls);
    Ok(())
}
