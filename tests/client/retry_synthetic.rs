use httpmock::Method::GET;
use nbu_rates::{Backoff, Currency, NbuClient, NbuError, RetryConfig, rates};
use std::time::Duration;
use url::Url;

use crate::common::{BASE_PATH, EXCHANGE_PATH, client_for, setup_server};

#[tokio::test]
async fn no_retries_by_default() {
    let server = setup_server();
    let fail_mock = server.mock(|when, then| {
        when.method(GET).path(EXCHANGE_PATH);
        then.status(503).body("Service Unavailable");
    });
    let client = client_for(&server);

    let result = rates::fetch_current(&client, "USD").await;

    fail_mock.assert_calls(1);
    assert!(matches!(result, Err(NbuError::Status { status: 503, .. })));
}

#[tokio::test]
async fn opt_in_retries_on_persistent_5xx() {
    let server = setup_server();
    let fail_mock = server.mock(|when, then| {
        when.method(GET).path(EXCHANGE_PATH);
        then.status(503).body("Service Unavailable");
    });

    let max_retries = 3;
    let mut retry = RetryConfig::enabled();
    retry.backoff = Backoff::Fixed(Duration::from_millis(1));
    retry.max_retries = max_retries;

    let client = NbuClient::builder()
        .base_url(Url::parse(&format!("{}{}", server.base_url(), BASE_PATH)).unwrap())
        .retry_config(retry)
        .build()
        .unwrap();

    let result = rates::fetch_current(&client, "USD").await;

    // 1 initial attempt + 3 retries.
    fail_mock.assert_calls((1 + max_retries) as usize);
    match result {
        Err(NbuError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected a Status error after all retries failed, got {other:?}"),
    }
}

#[tokio::test]
async fn per_handle_retry_override_ignores_404() {
    let server = setup_server();
    let not_found = server.mock(|when, then| {
        when.method(GET).path(EXCHANGE_PATH);
        then.status(404);
    });
    let client = client_for(&server);

    let mut retry = RetryConfig::enabled();
    retry.backoff = Backoff::Fixed(Duration::from_millis(1));

    let result = Currency::new(&client, "USD")
        .retry_policy(Some(retry))
        .current()
        .await;

    not_found.assert_calls(1);
    assert!(matches!(result, Err(NbuError::Status { status: 404, .. })));
}
