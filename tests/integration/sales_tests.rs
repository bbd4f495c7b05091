use crate::common::{TOKEN, create_test_client, invoice_json, mock_auth, page_json};
use chrono::NaiveDate;
use eduzz_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_sales_list_aggregates_two_pages_with_one_token() {
    let mut server = mockito::Server::new_async().await;
    let auth = mock_auth(&mut server, 1).await;

    let first_page: Vec<_> = (1..=100).map(invoice_json).collect();
    let second_page: Vec<_> = (101..=140).map(invoice_json).collect();

    let page_1 = server
        .mock("GET", "/sale/get_sale_list")
        .match_header("token", TOKEN)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start_date".into(), "2024-01-01".into()),
            Matcher::UrlEncoded("end_date".into(), "2024-01-31".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]))
        .with_status(200)
        .with_header("x-ratelimit-remaining", "28")
        .with_body(page_json(first_page, 1, Some(2)))
        .expect(1)
        .create_async()
        .await;
    let page_2 = server
        .mock("GET", "/sale/get_sale_list")
        .match_header("token", TOKEN)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]))
        .with_status(200)
        .with_header("x-ratelimit-remaining", "27")
        .with_body(page_json(second_page, 2, Some(2)))
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let request = SalesListRequest::new(date(2024, 1, 1), date(2024, 1, 31));
    let sales = client.get_sales_list(&request).await.unwrap();

    assert_eq!(sales.len(), 140);
    assert_eq!(sales.first().map(|s| s.sale_id), Some(1));
    assert_eq!(sales.last().map(|s| s.sale_id), Some(140));
    assert_eq!(client.rate_limit_state().await.remaining_calls, 27);
    auth.assert_async().await;
    page_1.assert_async().await;
    page_2.assert_async().await;
}

#[tokio::test]
async fn test_sales_list_failing_page_discards_everything() {
    let mut server = mockito::Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let _page_1 = server
        .mock("GET", "/sale/get_sale_list")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(page_json(vec![invoice_json(1)], 1, Some(3)))
        .create_async()
        .await;
    let page_2 = server
        .mock("GET", "/sale/get_sale_list")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(page_json(vec![invoice_json(0)], 2, Some(3)))
        .expect(1)
        .create_async()
        .await;
    let page_3 = server
        .mock("GET", "/sale/get_sale_list")
        .match_query(Matcher::UrlEncoded("page".into(), "3".into()))
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let request = SalesListRequest::new(date(2024, 1, 1), date(2024, 1, 31));
    let result = client.get_sales_list(&request).await;

    match result {
        Err(AppError::Validation(e)) => assert_eq!(e.reason, "invalid sale_id 0"),
        other => panic!("expected validation error, got {other:?}"),
    }
    page_2.assert_async().await;
    page_3.assert_async().await;
}

#[tokio::test]
async fn test_sales_list_without_paginator_is_one_request() {
    let mut server = mockito::Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let list = server
        .mock("GET", "/sale/get_sale_list")
        .match_query(Matcher::UrlEncoded("contract_id".into(), "55".into()))
        .with_status(200)
        .with_body(page_json(vec![invoice_json(1), invoice_json(2)], 1, None))
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let request = SalesListRequest::new(date(2024, 1, 1), date(2024, 1, 31)).with_contract(55);
    let sales = client.get_sales_list(&request).await.unwrap();

    assert_eq!(sales.len(), 2);
    list.assert_async().await;
}

#[tokio::test]
async fn test_get_sale_returns_first_record() {
    let mut server = mockito::Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let sale = server
        .mock("GET", "/sale/get_sale/42")
        .with_status(200)
        .with_body(page_json(vec![invoice_json(42)], 1, None))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let invoice = client.get_sale(42).await.unwrap();

    assert_eq!(invoice.sale_id, 42);
    assert_eq!(invoice.sale_total, Some(97.0));
    sale.assert_async().await;
}

#[tokio::test]
async fn test_get_sale_empty_list_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let _sale = server
        .mock("GET", "/sale/get_sale/42")
        .with_status(200)
        .with_body(page_json(vec![], 1, None))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let result = client.get_sale(42).await;
    assert!(matches!(result, Err(AppError::NotFound(_))), "{result:?}");
}

#[tokio::test]
async fn test_get_sale_rejects_invalid_id_locally() {
    let mut server = mockito::Server::new_async().await;
    let auth = mock_auth(&mut server, 0).await;

    let client = create_test_client(&server);
    let result = client.get_sale(0).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))), "{result:?}");
    auth.assert_async().await;
}

#[tokio::test]
async fn test_last_days_amount() {
    let mut server = mockito::Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let amounts = server
        .mock("GET", "/sale/last_days_amount")
        .match_query(Matcher::UrlEncoded("days".into(), "7".into()))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [{
                    "date": "2024/03/14",
                    "sale_discount": 0.0,
                    "sale_amount_win": 194.0,
                    "sale_net_gain": 170.0,
                    "sale_coop": 0.0,
                    "sale_fee": 24.0,
                    "sale_others": 0.0,
                    "sale_total": 194.0
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server);
    let days = client.get_last_days_amount(Some(7)).await.unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, date(2024, 3, 14));
    assert_eq!(days[0].sale_total, 194.0);
    amounts.assert_async().await;
}
