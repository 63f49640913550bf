use chrono::NaiveDate;
use httpmock::{Method::GET, Mock, MockServer};
use nbu_rates::{NbuError, TrendBuilder, trend};
use rust_decimal::Decimal;

use crate::common::{
    EXCHANGE_PATH, client_for, mock_code_on, mock_code_on_empty, mock_list_on, setup_server,
};

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 3, day).unwrap()
}

#[tokio::test]
async fn three_day_trend_by_code() {
    let server = setup_server();
    let d1 = mock_code_on(&server, "USD", "20190301");
    let d2 = mock_code_on(&server, "USD", "20190302");
    let d3 = mock_code_on(&server, "USD", "20190303");
    let client = client_for(&server);

    let t = trend::build_sequence(&client, "USD", march(1), march(3)).await.unwrap();

    d1.assert();
    d2.assert();
    d3.assert();
    assert_eq!(
        t.rates(),
        &[Decimal::new(2700, 2), Decimal::new(2750, 2), Decimal::new(2720, 2)]
    );
    assert_eq!(t.to_string(), "0 +0.5 -0.3");
}

#[tokio::test]
async fn trend_by_numeric_code_uses_day_lists() {
    let server = setup_server();
    let mocks = [
        mock_list_on(&server, "20190301"),
        mock_list_on(&server, "20190302"),
        mock_list_on(&server, "20190303"),
    ];
    let client = client_for(&server);

    let t = trend::build_sequence(&client, "978", march(1), march(3)).await.unwrap();

    for m in &mocks {
        m.assert();
    }
    assert_eq!(t.to_string(), "0 +0.12 0");
    assert_eq!((t.start(), t.end()), (march(1), march(3)));
}

#[tokio::test]
async fn single_day_trend_is_just_the_sentinel() {
    let server = setup_server();
    let d1 = mock_code_on(&server, "USD", "20190301");
    let client = client_for(&server);

    let t = trend::build_sequence(&client, "usd", march(1), march(1)).await.unwrap();

    d1.assert();
    assert_eq!(t.to_string(), "0");
    assert!(t.deltas().is_empty());
}

#[tokio::test]
async fn reversed_range_makes_no_requests() {
    let server = setup_server();
    let any = server.mock(|when, then| {
        when.method(GET).path(EXCHANGE_PATH);
        then.status(200).body("[]");
    });
    let client = client_for(&server);

    let err = trend::build_sequence(&client, "USD", march(3), march(1)).await.unwrap_err();

    any.assert_calls(0);
    match err {
        NbuError::ReversedRange { start, end } => {
            assert_eq!(start, march(3));
            assert_eq!(end, march(1));
        }
        other => panic!("expected ReversedRange, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_middle_day_aborts_without_partial_trend() {
    let server = setup_server();
    let d1 = mock_code_on(&server, "USD", "20190301");
    let d2 = mock_code_on_empty(&server, "USD", "20190302");
    let d3 = mock_code_on(&server, "USD", "20190303");
    let client = client_for(&server);

    let err = TrendBuilder::new(&client, "USD", march(1), march(3))
        .fetch()
        .await
        .unwrap_err();

    d1.assert();
    d2.assert();
    // Serial fetching stops at the first miss.
    d3.assert_calls(0);
    match err {
        NbuError::CurrencyNotFound { token, date } => {
            assert_eq!(token, "USD");
            assert_eq!(date, Some(march(2)));
        }
        other => panic!("expected CurrencyNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_errors_propagate() {
    let server = setup_server();
    let d1 = mock_code_on(&server, "USD", "20190301");
    let d2 = server.mock(|when, then| {
        when.method(GET)
            .path(EXCHANGE_PATH)
            .query_param("date", "20190302");
        then.status(503).body("busy");
    });
    let client = client_for(&server);

    let err = trend::build_sequence(&client, "USD", march(1), march(2)).await.unwrap_err();

    d1.assert();
    d2.assert();
    assert!(matches!(err, NbuError::Status { status: 503, .. }), "got {err:?}");
}

fn mock_usd_rate<'a>(server: &'a MockServer, date: &'a str, rate: &str) -> Mock<'a> {
    let body = format!(
        r#"[{{"r030":840,"txt":"Долар США","rate":{rate},"cc":"USD","exchangedate":"{}.{}.{}"}}]"#,
        &date[6..8],
        &date[4..6],
        &date[0..4]
    );
    server.mock(|when, then| {
        when.method(GET)
            .path(EXCHANGE_PATH)
            .query_param("valcode", "USD")
            .query_param("date", date);
        then.status(200)
            .header("content-type", "application/json")
            .body(body.as_str());
    })
}

#[tokio::test]
async fn half_cent_rate_rounds_like_a_float() {
    let server = setup_server();
    let d1 = mock_usd_rate(&server, "20190301", "27.045");
    let d2 = mock_usd_rate(&server, "20190302", "27.0");
    let client = client_for(&server);

    let t = trend::build_sequence(&client, "USD", march(1), march(2)).await.unwrap();

    d1.assert();
    d2.assert();
    assert_eq!(t.rates(), &[Decimal::new(2705, 2), Decimal::new(2700, 2)]);
    assert_eq!(t.to_string(), "0 -0.05");
}
