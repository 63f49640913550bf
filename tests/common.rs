#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use nbu_rates::NbuClient;
use std::{fs, path::Path};
use url::Url;

pub const BASE_PATH: &str = "/NBUStatService/v1/statdirectory/";
pub const EXCHANGE_PATH: &str = "/NBUStatService/v1/statdirectory/exchange";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> NbuClient {
    NbuClient::builder()
        .base_url(Url::parse(&format!("{}{}", server.base_url(), BASE_PATH)).unwrap())
        .build()
        .unwrap()
}

pub fn mock_current(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path(EXCHANGE_PATH)
            .query_param_exists("json")
            .query_param_missing("date")
            .query_param_missing("valcode");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("exchange", "current", "json"));
    })
}

pub fn mock_list_on<'a>(server: &'a MockServer, date: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(EXCHANGE_PATH)
            .query_param("date", date)
            .query_param_exists("json")
            .query_param_missing("valcode");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("exchange", date, "json"));
    })
}

pub fn mock_code_on<'a>(server: &'a MockServer, code: &'a str, date: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(EXCHANGE_PATH)
            .query_param("valcode", code)
            .query_param("date", date)
            .query_param_exists("json");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("exchange", &format!("{code}_{date}"), "json"));
    })
}

pub fn mock_code_on_empty<'a>(server: &'a MockServer, code: &'a str, date: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(EXCHANGE_PATH)
            .query_param("valcode", code)
            .query_param("date", date)
            .query_param_exists("json");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    })
}
