use httpmock::Method::GET;
use nbu_rates::{NbuError, rates};

use crate::common::{EXCHANGE_PATH, client_for, setup_server};

#[tokio::test]
async fn non_2xx_maps_to_status_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(EXCHANGE_PATH);
        then.status(500).body("oops");
    });
    let client = client_for(&server);

    let err = rates::fetch_current(&client, "USD").await.unwrap_err();
    mock.assert();

    match err {
        NbuError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/statdirectory/exchange"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_not_silently_empty() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(EXCHANGE_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"message":"maintenance"}"#);
    });
    let client = client_for(&server);

    let err = rates::fetch_current(&client, "USD").await.unwrap_err();
    mock.assert();

    assert!(matches!(err, NbuError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn unparseable_exchange_date_is_data_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(EXCHANGE_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"r030":840,"txt":"Долар США","rate":27.0,"cc":"USD","exchangedate":"yesterday"}]"#);
    });
    let client = client_for(&server);

    let err = rates::fetch_current(&client, "USD").await.unwrap_err();
    mock.assert();

    assert!(matches!(err, NbuError::Data(_)), "got {err:?}");
}
