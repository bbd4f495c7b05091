use crate::common::{self, TOKEN, create_test_client, mock_auth, test_config};
use eduzz_client::prelude::*;
use serde_json::json;
use tokio_test::assert_ok;

fn user_body() -> String {
    json!({"success": true, "data": [{"user_id": 1, "email": "me@example.com"}]}).to_string()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_calls_share_one_login() {
    let mut server = mockito::Server::new_async().await;
    let auth = mock_auth(&mut server, 1).await;
    let me = server
        .mock("GET", "/user/get_me")
        .match_header("token", TOKEN)
        .with_status(200)
        .with_body(user_body())
        .expect(10)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let handles: Vec<_> = (0..10)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_own_user_info().await })
        })
        .collect();

    for handle in handles {
        let users = handle.await.unwrap().unwrap();
        assert_eq!(users.len(), 1);
    }

    auth.assert_async().await;
    me.assert_async().await;
    assert_eq!(client.http_client().auth().login_count(), 1);
}

/// Spawns `n` concurrent user-info calls. On the current-thread runtime every
/// task queues on the login before the first reply is read.
async fn concurrent_user_info(client: &Client, n: usize) -> Vec<Result<Vec<UserInfo>, AppError>> {
    let handles: Vec<_> = (0..n)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_own_user_info().await })
        })
        .collect();

    let mut results = Vec::with_capacity(n);
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    results
}

#[tokio::test]
async fn test_concurrent_first_calls_share_one_rejected_login() {
    let mut server = mockito::Server::new_async().await;
    let auth = server
        .mock("POST", "/credential/generate_token")
        .with_status(401)
        .with_body(r#"{"success": false}"#)
        .expect(1)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/user/get_me")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let results = concurrent_user_info(&client, 10).await;

    assert_eq!(results.len(), 10);
    for result in &results {
        assert!(
            matches!(result, Err(AppError::Auth(reason)) if reason.contains("401")),
            "{result:?}"
        );
    }
    auth.assert_async().await;
    me.assert_async().await;
    assert_eq!(client.http_client().auth().login_count(), 1);
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn test_concurrent_first_calls_share_one_exhausted_login() {
    let mut server = mockito::Server::new_async().await;
    // One retry loop of three attempts, not one per caller
    let auth = server
        .mock("POST", "/credential/generate_token")
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let results = concurrent_user_info(&client, 5).await;

    let exhausted = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::UpstreamServer { attempts: 3, .. })))
        .count();
    let shared = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::Auth(_))))
        .count();
    assert_eq!(exhausted, 1);
    assert_eq!(shared, 4);
    auth.assert_async().await;
    assert_eq!(client.http_client().auth().login_count(), 1);
}

#[tokio::test]
async fn test_invalidate_forces_a_new_login() {
    let mut server = mockito::Server::new_async().await;
    let auth = mock_auth(&mut server, 2).await;
    let me = server
        .mock("GET", "/user/get_me")
        .match_header("token", TOKEN)
        .with_status(200)
        .with_body(user_body())
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server);
    assert_ok!(client.authenticate().await);
    assert!(client.is_authenticated().await);

    client.http_client().auth().invalidate().await;
    assert!(!client.is_authenticated().await);

    let users = client.get_own_user_info().await.unwrap();
    assert_eq!(users.len(), 1);
    assert!(client.is_authenticated().await);

    auth.assert_async().await;
    me.assert_async().await;
    assert_eq!(client.http_client().auth().login_count(), 2);
}

#[tokio::test]
async fn test_token_is_reused_across_calls() {
    let mut server = mockito::Server::new_async().await;
    let auth = mock_auth(&mut server, 1).await;
    let me = server
        .mock("GET", "/user/get_me")
        .match_header("token", TOKEN)
        .with_status(200)
        .with_body(user_body())
        .expect(3)
        .create_async()
        .await;

    let client = create_test_client(&server);
    assert!(!client.is_authenticated().await);
    assert_ok!(client.authenticate().await);
    assert!(client.is_authenticated().await);
    for _ in 0..3 {
        client.get_own_user_info().await.unwrap();
    }

    auth.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn test_rejected_credentials_fail_with_auth_error() {
    let mut server = mockito::Server::new_async().await;
    let auth = server
        .mock("POST", "/credential/generate_token")
        .with_status(401)
        .with_body(r#"{"success": false, "message": "invalid credentials"}"#)
        .expect(1)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/user/get_me")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let result = client.get_own_user_info().await;

    assert!(matches!(result, Err(AppError::Auth(_))), "{result:?}");
    assert!(!client.is_authenticated().await);
    auth.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn test_missing_token_fails_with_auth_error() {
    let mut server = mockito::Server::new_async().await;
    let auth = server
        .mock("POST", "/credential/generate_token")
        .with_status(200)
        .with_body(r#"{"success": true, "data": {"token": ""}}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let result = client.authenticate().await;

    assert!(matches!(result, Err(AppError::Auth(_))), "{result:?}");
    auth.assert_async().await;
}

#[tokio::test]
async fn test_failed_login_is_retried_by_next_call() {
    let mut server = mockito::Server::new_async().await;
    let rejected = server
        .mock("POST", "/credential/generate_token")
        .with_status(403)
        .expect(1)
        .create_async()
        .await;
    let client = create_test_client(&server);
    assert!(matches!(client.authenticate().await, Err(AppError::Auth(_))));
    rejected.assert_async().await;
    rejected.remove_async().await;

    let accepted = mock_auth(&mut server, 1).await;
    client.authenticate().await.unwrap();
    accepted.assert_async().await;
    assert_eq!(client.http_client().auth().login_count(), 2);
}

#[tokio::test]
async fn test_incomplete_credentials_never_reach_the_network() {
    let mut server = mockito::Server::new_async().await;
    let auth = server
        .mock("POST", "/credential/generate_token")
        .expect(0)
        .create_async()
        .await;

    let config = Config {
        credentials: Credentials::new("me@example.com", "", ""),
        ..test_config(&server)
    };
    let client = Client::new(config).unwrap();
    assert!(matches!(client.authenticate().await, Err(AppError::Auth(_))));
    auth.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_upstream_is_a_transport_error() {
    let server = mockito::Server::new_async().await;
    let config = common::test_config(&server).with_base_url("http://127.0.0.1:1");
    let client = Client::new(config).unwrap();

    let result = client.authenticate().await;
    assert!(
        matches!(result, Err(AppError::Transport(TransportError::Request(_)))),
        "{result:?}"
    );
}
